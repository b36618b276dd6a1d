pub mod request;
pub mod response;
pub mod types;

pub use response::*;
pub use request::*;
pub use types::*;

use serde::{Serialize, Deserialize};
use bincode::{serialize, deserialize, ErrorKind};

pub trait BinCodeMessage<'a>: Serialize + Deserialize<'a>{
    fn deser(bin: &'a [u8]) -> Result<Self, Box<ErrorKind>> {
        deserialize::<Self>(bin)
    }

    fn ser(&self) -> Result<Vec<u8>, Box<ErrorKind>> {
        serialize(&self)
    }
}
