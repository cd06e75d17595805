// animal-lens - Ask Gemini about the animal in a photo
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod input;
pub mod models;
pub mod request;
pub mod session;
pub mod ui;
pub mod utils;
pub mod vision;
