mod controller;
mod service;
mod util;
