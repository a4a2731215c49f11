pub mod c;

/// Where the CLI writes the generated C program, relative to the working directory.
pub const OUTPUT_FILE: &str = "generated.c";
