pub mod notation;
pub mod sets;
pub mod shell;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeMap, HashSet},
            hash::Hash
        };
    }
}

pub mod prelude {
    pub use super::notation::*;
    pub use super::sets::*;
    pub use super::shell::*;
    pub use super::utils::prelude::*;
}
