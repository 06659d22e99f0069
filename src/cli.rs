use clap::{Arg, Command};

pub fn build_cli() -> Command {
    Command::new("fastqconcat")
        .version("0.1.0")
        .about("Concatenate same-named fastq files found across a directory tree")
        .arg(
            Arg::new("root")
                .help("Root of the directory tree to scan")
                .default_value("."),
        )
        .arg(
            Arg::new("suffix")
                .short('s')
                .long("suffix")
                .help("Filename suffix that selects the source files")
                .default_value(".fastq"),
        )
}
