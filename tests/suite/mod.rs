mod input;
mod transcript;
