// Performance benchmarks for textpat compile and match operations

use std::time::Instant;

use textpat::{compile, find, Program};

fn main() {
    println!("textpat benchmarks\n");

    bench_compile();
    bench_literal_scan();
    bench_closure_backtracking();
    bench_class_scan();

    println!("\ndone");
}

fn bench_compile() {
    println!("COMPILE");
    println!("-------");

    let sources = vec!["abc", "%a*[0-9a-f]?x$", "[a-zA-Z0-9][a-zA-Z0-9]*"];

    for source in sources {
        let start = Instant::now();
        for _ in 0..10_000 {
            let _ = compile(source).unwrap();
        }
        let duration = start.elapsed();

        println!(
            "  {:<28} 10000 compiles in {:.3}ms",
            source,
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_literal_scan() {
    println!("LITERAL SCAN");
    println!("------------");

    let text = "lorem ipsum dolor sit amet ".repeat(200) + "needle";
    let program = compile("needle").unwrap();

    run(&text, &program, "needle at end of ~5KB");
    println!();
}

fn bench_closure_backtracking() {
    println!("CLOSURE BACKTRACKING");
    println!("--------------------");

    // worst case for one closure: consume everything, give it all back
    let text = "a".repeat(2_000);
    let program = compile("a*b").unwrap();

    run(&text, &program, "a*b against 2000 a's (miss)");

    let text = "a".repeat(2_000) + "b";
    run(&text, &program, "a*b against 2000 a's + b (hit)");
    println!();
}

fn bench_class_scan() {
    println!("CLASS SCAN");
    println!("----------");

    let text = "word 9381 word 2015-01-24 tail\n".repeat(100);
    let program = compile("[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]").unwrap();

    run(&text, &program, "date shape over ~3KB");
    println!();
}

fn run(text: &str, program: &Program, label: &str) {
    let start = Instant::now();
    let mut hits = 0;
    for _ in 0..100 {
        if find(text, program).is_some() {
            hits += 1;
        }
    }
    let duration = start.elapsed();

    println!(
        "  {:<32} 100 scans in {:.3}ms ({} hits)",
        label,
        duration.as_secs_f64() * 1000.0,
        hits
    );
}
