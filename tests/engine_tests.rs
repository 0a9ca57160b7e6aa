use std::collections::{LinkedList, VecDeque};

use nested_sort::{
    exchange_sort, is_container, recursive_sort, render, AlphabeticalPosition, Ascending,
    DemoConfig, DivisibleBy3First, OddFirst, PrintStyle, Strategy, SumOfDigits, SwapOrder, Tree,
};

fn rows_of<T: Clone>(list: &LinkedList<LinkedList<T>>) -> Vec<Vec<T>> {
    list.iter().map(|row| row.iter().cloned().collect()).collect()
}

#[test]
fn test_scenario_ascending() {
    let mut v: Vec<i32> = vec![5, 2, 9, 1, 5, 6];
    recursive_sort(&mut v, &Strategy::default());
    assert_eq!(render(&v, &PrintStyle::default()).unwrap(), "1 2 5 5 6 9\n");
}

#[test]
fn test_scenario_odd_first() {
    let mut v: Vec<i32> = vec![5, 2, 9, 1, 5, 6];
    recursive_sort(&mut v, &OddFirst);
    assert_eq!(v, vec![1, 5, 5, 9, 2, 6]);
}

#[test]
fn test_scenario_sum_of_digits() {
    let mut arr: [i32; 3] = [234, 56, 123];
    recursive_sort(&mut arr, &SumOfDigits);
    assert_eq!(arr, [123, 234, 56]);
}

#[test]
fn test_scenario_matrix_divisible_by_three() {
    let mut m: Vec<Vec<i32>> = vec![vec![5, 2, 9], vec![6, 3, 8], vec![1, 7, 4]];
    recursive_sort(&mut m, &DivisibleBy3First);
    assert_eq!(m[0], vec![9, 2, 5]);
    // rows keep their relative position
    assert_eq!(m, vec![vec![9, 2, 5], vec![3, 6, 8], vec![1, 4, 7]]);
}

#[test]
fn test_scenario_empty() {
    let mut empty: Vec<Vec<i32>> = Vec::new();
    let report = recursive_sort(&mut empty, &Ascending);
    assert!(report.is_noop());
    assert_eq!(render(&empty, &PrintStyle::default()).unwrap(), "{\n}\n");

    let mut flat: Vec<i32> = Vec::new();
    assert!(recursive_sort(&mut flat, &Ascending).is_noop());
    assert_eq!(render(&flat, &PrintStyle::default()).unwrap(), "{}\n");
}

#[test]
fn test_nested_list_of_lists_even_first() {
    let mut list: LinkedList<LinkedList<i32>> = vec![vec![5, 2, 9], vec![6, 3, 8]]
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();
    recursive_sort(&mut list, &Strategy::EvenFirst);
    assert_eq!(rows_of(&list), vec![vec![2, 5, 9], vec![6, 8, 3]]);
}

#[test]
fn test_deque_of_arrays() {
    let mut deque: VecDeque<[u64; 3]> = VecDeque::from(vec![[3, 2, 1], [10, 30, 20]]);
    recursive_sort(&mut deque, &|a: &u64, b: &u64| a < b);
    assert_eq!(Vec::from(deque), vec![[3, 2, 1], [30, 20, 10]]);
}

#[test]
fn test_words_by_alphabet_position() {
    let mut words: Vec<&str> = vec!["zz", "cab", "a"];
    exchange_sort(&mut words, &AlphabeticalPosition);
    assert_eq!(words, vec!["a", "cab", "zz"]);
}

#[test]
fn test_every_leaf_row_ordered_after_sort() {
    let mut cube: Vec<Vec<Vec<i32>>> = vec![
        vec![vec![1, 20, 5], vec![8, 15, 2]],
        vec![vec![30, 12, 4], vec![7, 10, 11]],
        vec![vec![25, 3, 14], vec![9, 6, 18]],
    ];
    let order = Strategy::ProximityTo(10);
    let report = recursive_sort(&mut cube, &order);

    assert_eq!(report.sequences, 6);
    for plane in &cube {
        for row in plane {
            assert!(row.windows(2).all(|w| !order.should_swap(&w[0], &w[1])));
        }
    }
    assert_eq!(cube[0][0], vec![5, 1, 20]);
}

#[test]
fn test_classifier_distinguishes_levels() {
    assert!(is_container::<Vec<Vec<i32>>>());
    assert!(!is_container::<i32>());
    assert!(is_container::<Tree<i32>>());
}

#[test]
fn test_irregular_forest_prints_depth_faithfully() {
    let mut forest = vec![Tree::leaf(3), Tree::branch([Tree::row([2, 1])])];
    recursive_sort(&mut forest, &Ascending);

    let out = render(&forest, &PrintStyle::default()).unwrap();
    let indents: Vec<(String, usize)> = out
        .lines()
        .map(|line| (line.trim().to_string(), line.len() - line.trim_start().len()))
        .collect();

    assert!(indents.contains(&("3".to_string(), 4)));
    assert!(indents.contains(&("1".to_string(), 12)));
    assert!(indents.contains(&("2".to_string(), 12)));
    let one = out.find("            1").unwrap();
    let two = out.find("            2").unwrap();
    assert!(one < two);
}

#[test]
fn test_config_drives_style_and_order() {
    let config = DemoConfig::from_toml_str(
        "[print]\nseparator = \"|\"\n\n[sort]\ndefault_order = \"descending\"\n",
    )
    .unwrap();

    let mut v: Vec<i32> = vec![1, 3, 2];
    recursive_sort(&mut v, &config.sort.default_order);
    assert_eq!(render(&v, &config.print).unwrap(), "3|2|1\n");
}
