use std::collections::LinkedList;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use nested_sort::{
    recursive_sort, write_container, AlphabeticalPosition, Container, DemoConfig,
    DivisibleBy3First, Element, EvenFirst, OddFirst, PrintStyle, ProximityTo, Strategy,
    SumOfDigits, SwapOrder, Tree,
};

#[derive(Parser)]
#[command(name = "nested-sort")]
#[command(about = "Sort flat and nested containers with pluggable orderings", long_about = None)]
struct Cli {
    /// TOML file with [print] and [sort] settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Default ordering (ascending, descending, odd-first, even-first,
    /// div3-first, sum-of-digits, proximity:<n>)
    #[arg(short, long)]
    order: Option<Strategy>,

    /// Sort these comma-separated integers instead of the sample set
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i64>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nested_sort=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(order) = cli.order {
        config.sort.default_order = order;
    }
    info!(order = %config.sort.default_order, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.values {
        Some(mut values) => {
            let order = config.sort.default_order;
            let label = order.to_string();
            demo(&mut out, &config.print, "custom input", &label, &mut values, &order)?;
        }
        None => run_samples(&mut out, &config)?,
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}

/// Print, sort, print again.
fn demo<W, C, O>(
    out: &mut W,
    style: &PrintStyle,
    name: &str,
    label: &str,
    data: &mut C,
    order: &O,
) -> Result<()>
where
    W: Write,
    C: Container,
    C::Item: Element,
    O: SwapOrder<<C::Item as Element>::Scalar>,
{
    writeln!(out, "{}", format!("Original {name}:").bold())?;
    write_container(data, out, style)?;

    let report = recursive_sort(data, order);
    info!(
        name,
        sequences = report.sequences,
        passes = report.passes,
        exchanges = report.exchanges,
        "sorted"
    );

    writeln!(out, "{}", format!("Sorted {name} ({label}):").green().bold())?;
    write_container(data, out, style)?;
    writeln!(out)?;
    Ok(())
}

fn to_lists(rows: Vec<Vec<i32>>) -> LinkedList<LinkedList<i32>> {
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn run_samples<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let style = &config.print;
    let default_order = config.sort.default_order;

    let mut vec_1d: Vec<i32> = vec![5, 2, 9, 1, 5, 6];
    let label = default_order.to_string();
    demo(out, style, "1D vector", &label, &mut vec_1d, &default_order)?;

    let mut list_1d: LinkedList<i32> = [5, 2, 9, 1, 5, 6].into_iter().collect();
    demo(out, style, "1D list", "odd numbers first", &mut list_1d, &OddFirst)?;

    let mut arr_1d: [i32; 6] = [234, 56, 123, 12, 345, 678];
    demo(out, style, "1D array", "sum of digits", &mut arr_1d, &SumOfDigits)?;

    let mut vec_2d: Vec<Vec<i32>> = vec![vec![5, 2, 9], vec![6, 3, 8], vec![1, 7, 4]];
    demo(out, style, "2D vector", "divisible by 3 first", &mut vec_2d, &DivisibleBy3First)?;

    let mut list_2d = to_lists(vec![vec![5, 2, 9], vec![6, 3, 8], vec![1, 7, 4]]);
    demo(out, style, "2D list", "even numbers first", &mut list_2d, &EvenFirst)?;

    let mut arr_2d: [[i32; 3]; 3] = [[234, 56, 123], [789, 23, 456], [12, 345, 678]];
    demo(out, style, "2D array", "sum of digits", &mut arr_2d, &SumOfDigits)?;

    let cube = vec![
        vec![vec![1, 20, 5], vec![8, 15, 2]],
        vec![vec![30, 12, 4], vec![7, 10, 11]],
        vec![vec![25, 3, 14], vec![9, 6, 18]],
    ];

    let mut vec_3d: Vec<Vec<Vec<i32>>> = cube.clone();
    demo(out, style, "3D vector", "proximity to 10", &mut vec_3d, &ProximityTo(10))?;

    let mut list_3d: LinkedList<LinkedList<LinkedList<i32>>> =
        cube.into_iter().map(to_lists).collect();
    demo(out, style, "3D list", "odd numbers first", &mut list_3d, &OddFirst)?;

    let mut words: Vec<String> = ["cab", "zz", "abc", "hello", "a"]
        .into_iter()
        .map(String::from)
        .collect();
    demo(out, style, "word list", "alphabetical position", &mut words, &AlphabeticalPosition)?;

    let mut forest: Vec<Tree<i32>> = vec![
        Tree::row([3, 1, 2]),
        Tree::branch([Tree::row([9, 7]), Tree::leaf(4)]),
        Tree::leaf(8),
    ];
    demo(out, style, "irregular tree", &default_order.to_string(), &mut forest, &default_order)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_output<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_demo_prints_before_and_after() {
        let mut values: Vec<i64> = vec![3, -1, 7];
        let out = plain_output(|buf| {
            demo(
                buf,
                &PrintStyle::default(),
                "custom input",
                "descending",
                &mut values,
                &Strategy::Descending,
            )
        });

        assert_eq!(
            out,
            "Original custom input:\n3 -1 7\nSorted custom input (descending):\n7 3 -1\n\n"
        );
        assert_eq!(values, vec![7, 3, -1]);
    }

    #[test]
    fn test_run_samples_with_defaults() {
        let out = plain_output(|buf| run_samples(buf, &DemoConfig::default()));

        assert!(out.contains("Sorted 1D vector (ascending):\n1 2 5 5 6 9\n"));
        assert!(out.contains("Sorted 1D list (odd numbers first):\n1 5 5 9 2 6\n"));
        assert!(out.contains("Sorted 1D array (sum of digits):\n12 123 234 56 345 678\n"));
        assert!(out.contains("Sorted word list (alphabetical position):\na cab abc zz hello\n"));
        assert!(out.contains("Sorted 2D vector (divisible by 3 first):\n{\n    {\n        9\n"));
        assert!(out.contains("Original irregular tree:"));
        assert_eq!(out.matches("Sorted ").count(), 10);
    }

    #[test]
    fn test_run_samples_follows_config() {
        let config = DemoConfig::from_toml_str(
            "[print]\nseparator = \",\"\n\n[sort]\ndefault_order = \"descending\"\n",
        )
        .unwrap();
        let out = plain_output(|buf| run_samples(buf, &config));

        assert!(out.contains("Sorted 1D vector (descending):\n9,6,5,5,2,1\n"));
        assert!(out.contains("Sorted irregular tree (descending):"));
    }
}
