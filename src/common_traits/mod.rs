mod debug;
mod display;
mod eq;
mod from_iter;
