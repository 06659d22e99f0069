use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

// One group of same-named files: the base filename and the directories where
// a file of that name was found, in walk order.
pub struct FileGroup {
    pub name: String,
    pub dirs: Vec<PathBuf>,
}

// Walks the tree under `root` bottom-up and groups every non-directory entry
// whose name ends with `suffix` (exact, case-sensitive) by its base filename.
// Groups come back in the order their names were first seen. Entries the
// walker cannot read are skipped; names that are not valid UTF-8 cannot match
// a suffix and are skipped too.
pub fn scan_tree(root: &Path, suffix: &str) -> Vec<FileGroup> {
    let mut groups: Vec<FileGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    // contents_first makes the walk bottom-up. Sorting directories before
    // their sibling files makes a directory's subtrees come before its own
    // files, so a name in a subdirectory is always grouped before the same
    // name in a parent. Sibling directories keep the order the filesystem
    // yields them.
    let walk = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .sort_by(|a, b| b.file_type().is_dir().cmp(&a.file_type().is_dir()));

    for entry in walk.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => continue,
        };
        if !name.ends_with(suffix) {
            continue;
        }
        let dir = match entry.path().parent() {
            Some(dir) => dir.to_path_buf(),
            None => continue, // unreachable below min_depth(1)
        };
        let i = *index.entry(name.to_string()).or_insert_with(|| {
            groups.push(FileGroup {
                name: name.to_string(),
                dirs: Vec::new(),
            });
            groups.len() - 1
        });
        groups[i].dirs.push(dir);
    }

    groups
}

// Reads every source of the group in recorded order and writes the
// concatenation, with no separator, to a file of the same name in `out_dir`.
// An existing file of that name is overwritten. The destination is written
// once, after all sources are read, so a destination that is itself listed as
// a source is read before it is replaced.
pub fn concat_group(group: &FileGroup, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut merged: Vec<u8> = Vec::new();
    for dir in &group.dirs {
        let src = dir.join(&group.name);
        let bytes = fs::read(&src).map_err(|e| format!("couldn't read {}: {}", src.display(), e))?;
        merged.extend_from_slice(&bytes);
    }
    let dst = out_dir.join(&group.name);
    fs::write(&dst, &merged).map_err(|e| format!("couldn't write {}: {}", dst.display(), e))?;
    Ok(())
}

pub fn concat_groups(groups: &[FileGroup], out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    for group in groups {
        concat_group(group, out_dir)?;
    }
    Ok(())
}
