mod discover;
mod index;
mod misc;
mod rank;
mod text_tools;
