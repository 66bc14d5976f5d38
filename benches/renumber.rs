use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use footnote_sort::renumber;

// 生成 paragraphs 段正文，每段若干引用，label 倒序定义在文末
fn build_document(paragraphs: usize) -> String {
    let mut body = Vec::with_capacity(paragraphs);
    let mut definitions = Vec::with_capacity(paragraphs * 2);
    for i in 0..paragraphs {
        body.push(format!(
            "Paragraph {i} cites a source[^src-{i}], 引用中文来源[^cn-{i}] and an earlier one[^src-{}].",
            i / 2
        ));
    }
    for i in (0..paragraphs).rev() {
        definitions.push(format!("[^src-{i}]: Source number {i}, page {}", i * 3));
        definitions.push(format!("[^cn-{i}]: 中文来源 {i}"));
        if i % 10 == 0 {
            definitions.push(format!("[^unused-{i}]: never referenced"));
        }
    }
    format!("{}\n\n{}\n", body.join("\n\n"), definitions.join("\n"))
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("renumber");
    for size in [10, 100, 1000] {
        let text = build_document(size);
        let label = format!("{}bytes", text.len());
        group.bench_with_input(BenchmarkId::new("document", &label), &text, |b, text| {
            b.iter(|| renumber(text))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
