mod check;
mod color;
mod iter;
mod node;
mod raw_osrbtree_map;

pub(crate) use iter::{RawIter, RawIterMut};
pub(crate) use raw_osrbtree_map::RawOSRBTreeMap;
