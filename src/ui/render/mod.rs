mod all;
mod footer;
mod header;
mod input;
mod log;
mod results;

use self::log::log;
use super::*;
use footer::footer;
use header::header;
use input::input;
use results::results;

pub use all::all as render;
