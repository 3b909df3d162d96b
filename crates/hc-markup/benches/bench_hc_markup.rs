use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hc_markup::{to_html, Html5everTree, MarkupTree};
use rand::Rng;

fn generate_html(size_kb: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut html = String::from("<!DOCTYPE html><html><head><title>Bench</title></head><body>");
    while html.len() < size_kb * 1024 {
        let n: u32 = rng.gen_range(0..1000);
        html.push_str(&format!(
            r#"<div class="card c{n}"><h2>Item {n}</h2><p style="color:red">Body text for item {n} with <a href="/item/{n}">a link</a>.</p><ul><li>one</li><li>two</li></ul></div>"#
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let tree = Html5everTree::new();
    for kb in [10, 100] {
        let html = generate_html(kb);
        c.bench_function(&format!("parse_{kb}kb"), |b| {
            b.iter(|| black_box(tree.parse(black_box(&html)).unwrap()))
        });
    }
}

fn bench_serialize(c: &mut Criterion) {
    let tree = Html5everTree::new();
    let doc = tree.parse(&generate_html(100)).unwrap();
    c.bench_function("serialize_100kb", |b| {
        b.iter(|| black_box(to_html(black_box(&doc)).unwrap()))
    });
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
