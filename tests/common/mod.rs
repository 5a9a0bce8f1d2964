#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn quill_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quill").unwrap();
    cmd.env_remove("QUILL_ROOT");
    cmd
}

/// Write a post source under content/posts with the given front matter.
pub fn write_post(root: &Path, file: &str, title: &str, date: &str, tags: &[&str]) {
    let tag_list = tags
        .iter()
        .map(|tag| format!("\"{}\"", tag))
        .collect::<Vec<_>>()
        .join(", ");
    let source = format!(
        "+++\n\
        title = \"{}\"\n\
        date = \"{}\"\n\
        tags = [{}]\n\
        +++\n\
        \n\
        ## Notes\n\
        \n\
        Body of {}.\n",
        title, date, tag_list, title
    );
    fs::write(root.join("content/posts").join(file), source).unwrap();
}
