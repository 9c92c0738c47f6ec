//! Table assembly and layout benchmarks
//!
//! Measures cell generation for growing item lists and grid layout of the
//! recorded result.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tabula::layout::ImageMeasurer;
use tabula::{
    DataTable, DataTableStyle, Document, FontSpec, InMemoryResourceProvider, PageConfiguration, Point,
    RecordingDocument, Tabular,
};

#[derive(Tabular)]
struct Order {
    id: u64,
    #[tabula(rename = "Customer")]
    customer_name: String,
    amount: f64,
    note: Option<String>,
}

fn orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| Order {
            id: i as u64,
            customer_name: format!("Customer {}", i % 97),
            amount: (i as f64) * 1.25,
            note: (i % 3 == 0).then(|| "priority".to_string()),
        })
        .collect()
}

fn benchmark_render_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_cells");
    let style = DataTableStyle::defaults(&FontSpec::new("Helvetica").with_size(9.0));

    for row_count in [10, 100, 1000] {
        let data = orders(row_count);
        group.bench_with_input(BenchmarkId::new("rows", row_count), &row_count, |b, _| {
            b.iter(|| {
                let rendered = DataTable::new(&data)
                    .with_style(style.clone())
                    .extractor("amount", |o: &Order| format!("{:.2}", o.amount))
                    .render()
                    .expect("Failed to render table");
                black_box(rendered.cell_count())
            });
        });
    }

    group.finish();
}

fn benchmark_document_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_layout");
    let resources = InMemoryResourceProvider::new();

    for row_count in [10, 100, 1000] {
        let data = orders(row_count);
        let page = PageConfiguration::default();
        let mut document = Document::new(RecordingDocument::new(page), page);
        document.register_font(FontSpec::new("Helvetica").with_size(9.0), true);
        document.open().expect("Failed to open document");
        document
            .add_data_table(&data, |table| table)
            .expect("Failed to add table");
        let recording = document.into_renderer();
        let table = recording.tables().next().expect("No table recorded");

        group.bench_with_input(BenchmarkId::new("rows", row_count), &row_count, |b, _| {
            b.iter(|| {
                let mut measurer = ImageMeasurer::new(&resources);
                let layout = table
                    .layout(Point::new(36.0, 806.0), page.utilizable_width(), &mut measurer)
                    .expect("Failed to lay out table");
                black_box(layout.grid.bounds)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_render_cells, benchmark_document_layout);
criterion_main!(benches);
