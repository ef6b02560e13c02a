//! Display ordering.

use crate::models::FileInfo;

/// Sort files oldest first.
///
/// The sort is stable, so files sharing a timestamp keep their input order.
/// A missing `create_at` sorts as `0`, ahead of every real upload time.
pub fn order_files(file_infos: &[FileInfo]) -> Vec<&FileInfo> {
    let mut ordered: Vec<&FileInfo> = file_infos.iter().collect();
    ordered.sort_by_key(|file| file.sort_timestamp());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(files: &[&FileInfo]) -> Vec<String> {
        files.iter().map(|file| file.id.to_string()).collect()
    }

    #[test]
    fn sorts_by_creation_time_ascending() {
        let files = vec![
            FileInfo::new("file_id_3", "image_3.png", "png").with_create_at(3),
            FileInfo::new("file_id_2", "image_2.png", "png").with_create_at(2),
            FileInfo::new("file_id_1", "image_1.png", "png").with_create_at(1),
        ];

        assert_eq!(
            ids(&order_files(&files)),
            vec!["file_id_1", "file_id_2", "file_id_3"]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let files = vec![
            FileInfo::new("b", "b.png", "png").with_create_at(5),
            FileInfo::new("a", "a.png", "png").with_create_at(5),
            FileInfo::new("first", "first.png", "png").with_create_at(1),
            FileInfo::new("c", "c.png", "png").with_create_at(5),
        ];

        assert_eq!(ids(&order_files(&files)), vec!["first", "b", "a", "c"]);
    }

    #[test]
    fn missing_timestamp_sorts_as_zero() {
        let files = vec![
            FileInfo::new("late", "late.txt", "txt").with_create_at(10),
            FileInfo::new("unknown", "unknown.txt", "txt"),
            FileInfo::new("epoch", "epoch.txt", "txt").with_create_at(0),
            FileInfo::new("negative", "negative.txt", "txt").with_create_at(-1),
        ];

        assert_eq!(
            ids(&order_files(&files)),
            vec!["negative", "unknown", "epoch", "late"]
        );
    }

    #[test]
    fn output_is_sorted_and_complete() {
        let timestamps = [7, 3, 3, 9, 0, 3, 1, 7];
        let files: Vec<FileInfo> = timestamps
            .iter()
            .enumerate()
            .map(|(index, ts)| {
                FileInfo::new(format!("f{index}"), format!("{index}.bin"), "bin").with_create_at(*ts)
            })
            .collect();

        let ordered = order_files(&files);
        assert_eq!(ordered.len(), files.len());
        assert!(ordered
            .windows(2)
            .all(|pair| pair[0].sort_timestamp() <= pair[1].sort_timestamp()));
        assert_eq!(
            ids(&ordered),
            vec!["f4", "f6", "f1", "f2", "f5", "f0", "f7", "f3"]
        );
    }

    #[test]
    fn empty_input_yields_empty_order() {
        assert!(order_files(&[]).is_empty());
    }
}
