mod input;
mod progress;
