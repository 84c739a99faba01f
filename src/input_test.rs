#[cfg(test)]
mod tests {
    use crate::closest::Point;
    use crate::input::{DatasetReader, InputError, read_points_csv};
    use std::fs;
    use std::path::PathBuf;

    fn read_all(input: &str) -> Vec<Result<Vec<Point>, InputError>> {
        DatasetReader::new(input.as_bytes()).collect()
    }

    #[test]
    fn test_reads_datasets_until_zero() {
        let datasets = read_all("3\n0 0\n3 4\n1 1\n2\n-1.5 2\n7 8.25\n0\n2\n5 5\n6 6\n");
        assert_eq!(datasets.len(), 2);

        let first = datasets[0].as_ref().expect("first dataset");
        assert_eq!(
            first,
            &vec![Point([0.0, 0.0]), Point([3.0, 4.0]), Point([1.0, 1.0])]
        );
        let second = datasets[1].as_ref().expect("second dataset");
        assert_eq!(second, &vec![Point([-1.5, 2.0]), Point([7.0, 8.25])]);
    }

    #[test]
    fn test_free_form_whitespace() {
        let datasets = read_all("  3 0 0\n\n3\t4   1\n 1");
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].as_ref().expect("dataset").len(), 3);
    }

    #[test]
    fn test_end_of_input_without_terminator() {
        assert!(read_all("").is_empty());
        assert!(read_all("0\n").is_empty());
        assert!(read_all("\n  \n").is_empty());
        assert_eq!(read_all("2\n0 0\n1 1\n").len(), 1);
    }

    #[test]
    fn test_invalid_count() {
        for input in ["abc\n", "-2\n1 1\n2 2\n", "2.5\n"] {
            let datasets = read_all(input);
            assert_eq!(datasets.len(), 1, "input {:?}", input);
            assert!(matches!(
                datasets[0],
                Err(InputError::InvalidCount { line: 1, .. })
            ));
        }
    }

    #[test]
    fn test_invalid_coordinate() {
        let datasets = read_all("2\n0 0\n1 x\n");
        assert_eq!(datasets.len(), 1);
        match &datasets[0] {
            Err(InputError::InvalidCoordinate { token, line }) => {
                assert_eq!(token, "x");
                assert_eq!(*line, 3);
            }
            other => panic!("unexpected result {:?}", other),
        }

        for input in ["2\n0 0\nNaN 1\n", "2\n0 inf\n1 1\n"] {
            assert!(matches!(
                read_all(input)[0],
                Err(InputError::InvalidCoordinate { .. })
            ));
        }
    }

    #[test]
    fn test_unexpected_eof() {
        let datasets = read_all("3\n0 0\n1");
        assert!(matches!(
            datasets[0],
            Err(InputError::UnexpectedEof {
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn test_too_few_points() {
        let datasets = read_all("1\n5 5\n2\n0 0\n1 1\n");
        // Reading stops at the first error
        assert_eq!(datasets.len(), 1);
        assert!(matches!(
            datasets[0],
            Err(InputError::TooFewPoints { count: 1, line: 1 })
        ));
    }

    #[test]
    fn test_read_points_csv() {
        let test_csv = "x,y
0,0
3,4
bad,row
1
1,1";

        let test_file = PathBuf::from("test_points_closest_pair.csv");
        fs::write(&test_file, test_csv).expect("Failed to create test CSV");

        let points = read_points_csv(&test_file).expect("Failed to read CSV");
        assert_eq!(
            points,
            vec![Point([0.0, 0.0]), Point([3.0, 4.0]), Point([1.0, 1.0])]
        );

        fs::remove_file(&test_file).ok();
    }

    #[test]
    fn test_read_points_csv_needs_two_points() {
        let test_file = PathBuf::from("test_points_closest_pair_single.csv");
        fs::write(&test_file, "2.5,3.5\n").expect("Failed to create test CSV");

        let result = read_points_csv(&test_file);
        assert!(matches!(
            result,
            Err(InputError::TooFewPoints { count: 1, .. })
        ));

        fs::remove_file(&test_file).ok();
    }

    #[test]
    fn test_read_points_csv_missing_file() {
        let result = read_points_csv(&PathBuf::from("no_such_points_file.csv"));
        assert!(matches!(result, Err(InputError::Csv(_))));
    }
}
