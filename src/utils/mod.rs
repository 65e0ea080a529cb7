pub mod colors;
pub mod date;
pub mod path;
pub mod shell_words;
pub mod table;
