mod all;
mod footer;
mod header;
mod list;
mod log;
mod notice;
mod unauthenticated;

use self::log::log;
use super::*;
use footer::footer;
use header::header;
use list::list;
use notice::notice;
use unauthenticated::unauthenticated;

pub use all::all as render;
