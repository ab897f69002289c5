#[macro_use]
mod util;

mod graph;
mod graphing;
mod markup;
mod upgrade;
