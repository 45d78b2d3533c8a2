use std::time::Instant;

use anyhow::{Context, Result};

use crate::cli::{Command, SortAlgo};
use primer::arrays;
use primer::containers::bst::Bst;
use primer::containers::singly::SinglyList;
use primer::graph::Graph;
use primer::numerical::digits::reverse_digits;
use primer::numerical::primes::sieve;
use primer::parallel::{fill_parallel, fill_sequential};
use primer::searching::binary_search::binary_search;
use primer::sorting::bubble_sort::bubble_sort;
use primer::sorting::insertion_sort::insertion_sort;
use primer::sorting::quick_sort::quick_sort;
use primer::sorting::selection_sort::selection_sort;

pub fn execute_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Sort { algo, mut values } => {
            match algo {
                SortAlgo::Insertion => insertion_sort(&mut values),
                SortAlgo::Selection => selection_sort(&mut values),
                SortAlgo::Bubble => bubble_sort(&mut values),
                SortAlgo::Quick => quick_sort(&mut values),
            }
            println!("{}", braces(&values));
        }
        Command::Search { target, mut values } => {
            quick_sort(&mut values);
            println!("sorted: {}", braces(&values));
            match binary_search(&values, &target) {
                Some(index) => println!("{target} found at index {index}"),
                None => println!("{target} not found"),
            }
        }
        Command::List { values } => {
            let mut list: SinglyList<i64> = values.into_iter().collect();
            println!("list:     {list:?}");
            let first = list.pop_front();
            let last = list.pop_back();
            println!("popped front {first:?} and back {last:?}: {list:?}");
            list.reverse();
            println!("reversed: {list:?}");
        }
        Command::Tree { values } => {
            let tree: Bst<i64> = values.into_iter().collect();
            println!("size: {}, height: {}", tree.len(), tree.height());
            println!("in-order:   {:?}", tree.in_order());
            println!("pre-order:  {:?}", tree.pre_order());
            println!("post-order: {:?}", tree.post_order());
        }
        Command::Graph { vertices, edges, start, json } => {
            let mut graph = Graph::new(vertices);
            for edge in &edges {
                let (u, v) = parse_edge(edge)?;
                graph.add_edge(u, v)?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&graph.snapshot())?);
            } else {
                for (u, neighbours) in graph.as_slice().iter().enumerate() {
                    println!("{u} -> {neighbours:?}");
                }
                println!("bfs from {start}: {:?}", graph.bfs(start)?);
                println!("dfs from {start}: {:?}", graph.dfs(start)?);
            }
        }
        Command::Primes { limit } => {
            for p in sieve(limit) {
                println!("{p}");
            }
        }
        Command::Reverse { n } => {
            println!("{}", reverse_digits(n));
        }
        Command::Rotate { k, mut values } => {
            arrays::rotate_right(&mut values, k);
            println!("{}", braces(&values));
        }
        Command::Bench { size } => {
            println!("filling {size} slots...");

            let started = Instant::now();
            let sequential = fill_sequential(size);
            println!("sequential: {} ms", started.elapsed().as_millis());

            let started = Instant::now();
            let parallel = fill_parallel(size);
            println!("parallel:   {} ms", started.elapsed().as_millis());

            println!("results equal: {}", sequential == parallel);
        }
    }
    Ok(())
}

fn parse_edge(raw: &str) -> Result<(usize, usize)> {
    let (u, v) = raw
        .split_once(',')
        .with_context(|| format!("edge `{raw}` is not of the form u,v"))?;
    let u = u.trim().parse().with_context(|| format!("bad vertex in edge `{raw}`"))?;
    let v = v.trim().parse().with_context(|| format!("bad vertex in edge `{raw}`"))?;
    Ok((u, v))
}

/// Render as `{ 1, 2, 3 }`.
fn braces(values: &[i64]) -> String {
    let body: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{{ {} }}", body.join(", "))
}
