use derive_new::new;
use fake::Fake;
use fake::faker::lorem::en::Words;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// A few lines of random prose, one sentence per line.
pub fn random_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| Words(3..8).fake::<Vec<String>>().join(" "))
        .collect()
}
