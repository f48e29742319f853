use criterion::{criterion_group, criterion_main, Criterion};
use gallina_parse::GoalIter;
use klono::search::{self, Candidate};
use klono::{parse, Goal};

fn candidates(file: &str, goals: &str) -> Vec<Candidate> {
    let goals = GoalIter::new(goals).map(|g| Goal::try_from(g.unwrap()).unwrap());
    goals.map(|g| Candidate::new(file.into(), g).unwrap()).collect()
}

/// `forall (x1 : A) ... (xn : A), f x1 (... (f x(n-1) xn))` with bound names prefixed by `x`.
fn nested(x: &str, n: usize) -> String {
    let binders: Vec<_> = (0..n).map(|i| format!("({}{} : A)", x, i)).collect();
    let mut body = format!("{}{}", x, n - 1);
    for i in (0..n - 1).rev() {
        body = format!("f {}{} ({})", x, i, body);
    }
    format!("forall {}, {}", binders.join(" "), body)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let arith = include_str!("../../demos/arith.goals");
    let lists = include_str!("../../demos/lists.goals");
    let cands = [candidates("arith", arith), candidates("lists", lists)].concat();

    let t1 = parse(&nested("x", 200)).unwrap();
    let t2 = parse(&nested("x", 200)).unwrap();
    let t3 = parse(&nested("y", 200)).unwrap();

    c.bench_function("parse", |b| b.iter(|| candidates("arith", arith)));
    c.bench_function("alpha_same", |b| b.iter(|| t1.alpha_equiv(&t2)));
    c.bench_function("alpha_renamed", |b| b.iter(|| t1.alpha_equiv(&t3)));
    c.bench_function("search", |b| b.iter(|| search::clones(&cands)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
