#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_domain as domain;
pub use vc_map as map;
pub use vc_reflect as reflect;

pub mod prelude {
    pub use crate::map::{MapError, MapTo, Mapper, map};
    pub use crate::reflect::prelude::*;
}
