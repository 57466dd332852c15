use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct Benchmark {
    f: Rc<dyn Fn()>,
    name: String,
    iterations: usize,
}

impl Benchmark {
    pub fn iter<F: Fn() + 'static>(name: &str, n: usize, f: F) -> Self {
        Self {
            f: Rc::new(f),
            name: name.to_string(),
            iterations: n,
        }
    }

    pub fn once<F: Fn() + 'static>(name: &str, f: F) -> Self {
        Self::iter(name, 1, f)
    }

    /// Mean wall-clock time per iteration.
    pub fn run(&self) -> Duration {
        let start = Instant::now();
        for _ in 0..self.iterations {
            (self.f)();
        }
        start.elapsed() / self.iterations as u32
    }
}

pub struct BenchmarkReport {
    benches: Vec<Benchmark>,
}

impl BenchmarkReport {
    pub fn new() -> Self {
        Self { benches: vec![] }
    }

    pub fn add_bench(&mut self, bench: Benchmark) {
        self.benches.push(bench);
    }

    pub fn run_report(&self) {
        let mut out = stdout();
        for bench in &self.benches {
            write!(out, "{:<32}", bench.name).unwrap();
            out.flush().unwrap();
            let mean = bench.run();
            writeln!(out, "{:>10}ms", mean.as_millis()).unwrap();
        }
    }
}
