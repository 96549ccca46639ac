use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use normkit::{dedupe, insert_at, sort_by_key, Collection, DelimitedList, Key, Value};

fn rows(n: usize) -> Collection {
    Collection::from_values((0..n).map(|i| {
        Value::Mapping(Collection::from_entries(vec![
            (Key::from("name"), Value::from(format!("item{}", (i * 7919) % n))),
            (Key::from("rank"), Value::from(i as i64)),
        ]))
    }))
}

fn bench_sort_by_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_key");
    let key = Key::from("name");

    for size in [16, 256, 4096].iter() {
        let input = rows(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("rows_{size}"), |b| {
            b.iter(|| sort_by_key(black_box(&input), black_box(&key)))
        });
    }

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let input = Collection::from_values((0..1024).map(|i| i % 97));
    c.bench_function("insert_at_middle_1024", |b| {
        b.iter(|| insert_at(black_box(&input), 512, Value::from("x")).expect("in range"))
    });
    c.bench_function("dedupe_1024", |b| b.iter(|| dedupe(black_box(&input))));
}

fn bench_delimited(c: &mut Criterion) {
    let list = DelimitedList::from_items((0..512).map(|i| format!("tag{i}")), ",");
    c.bench_function("delimited_find_no_case_512", |b| {
        b.iter(|| list.find_no_case(black_box("TAG511")))
    });
    c.bench_function("delimited_append_512", |b| {
        b.iter(|| list.append(black_box("tail")))
    });
}

criterion_group!(benches, bench_sort_by_key, bench_positional, bench_delimited);
criterion_main!(benches);
