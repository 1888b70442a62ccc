mod config;
mod oracle;
mod value;

pub use self::{
    config::FuzzConfig,
    value::{FuzzRefTy, FuzzVal, FuzzValType},
};
