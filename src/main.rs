use std::path::Path;

use fastq_concat::{concat_group, scan_tree};
use indicatif::ProgressBar;

mod cli;

fn main() {
    let matches = cli::build_cli().get_matches();
    // Both arguments carry defaults, so get_one always succeeds.
    let root = matches.get_one::<String>("root").unwrap();
    let suffix = matches.get_one::<String>("suffix").unwrap();

    let groups = scan_tree(Path::new(root), suffix);

    // Every group is reported before any merging begins.
    for group in &groups {
        println!("{} : {:?}", group.name, group.dirs);
    }

    // Outputs go to the working directory, whatever the scan root was.
    let progress = ProgressBar::new(groups.len() as u64);
    for group in &groups {
        if let Err(why) = concat_group(group, Path::new(".")) {
            panic!("{}", why);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
}
