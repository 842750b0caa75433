pub mod init;
pub mod prompt_sequence;
pub mod run;
