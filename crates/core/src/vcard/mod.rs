mod escape;
mod format;

pub use escape::escape_text;
pub use format::{generate, vcf_file_name};
