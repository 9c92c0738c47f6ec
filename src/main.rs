use chrono::Local;
use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::env;
use std::error::Error;
use std::io::Cursor;
use tabula::preview::document_preview;
use tabula::{
    ColumnLayout, Document, FontProvider, FontSpec, FontStyle, ImageElement, InMemoryResourceProvider, Paragraph,
    RecordingDocument, ReportConfig, Size, Tabular, TableWidth,
};

const LOGO: &str = "logo.png";
const ITEMS_PER_PAGE: usize = 4;

#[derive(Tabular)]
struct Employee {
    id: u32,
    #[tabula(rename = "Full Name")]
    name: String,
    department: String,
    salary: u32,
    manager: Option<String>,
    #[tabula(ignore)]
    #[allow(dead_code)]
    badge_code: BadgeCode,
}

/// Internal badge number, kept out of reports.
struct BadgeCode(#[allow(dead_code)] u32);

fn random_employees(count: usize) -> Vec<Employee> {
    const FIRST: &[&str] = &["Ana", "Bo", "Carla", "Dmitri", "Eun-ji", "Farid", "Greta", "Hugo"];
    const LAST: &[&str] = &["Silva", "Berg", "Novak", "Okafor", "Lindqvist", "Tanaka", "Moreau"];
    const DEPARTMENTS: &[&str] = &["Sales", "Engineering", "Finance", "Support"];

    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let first = FIRST.choose(&mut rng).copied().unwrap_or("Ana");
            let last = LAST.choose(&mut rng).copied().unwrap_or("Silva");
            let manager = rng
                .random_bool(0.7)
                .then(|| format!("{} {}", FIRST[i % FIRST.len()], LAST[(i + 3) % LAST.len()]));
            Employee {
                id: i as u32 + 1,
                name: format!("{} {}", first, last),
                department: DEPARTMENTS.choose(&mut rng).copied().unwrap_or("Sales").to_string(),
                salary: rng.random_range(38..140) * 1000,
                manager,
                badge_code: BadgeCode(rng.random_range(0..100_000)),
            }
        })
        .collect()
}

/// A small two-tone PNG standing in for a company logo.
fn logo_png() -> Result<Vec<u8>, image::ImageError> {
    let image = RgbImage::from_fn(80, 40, |x, _| {
        if x < 40 {
            Rgb([32, 96, 160])
        } else {
            Rgb([240, 160, 32])
        }
    });
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [employee-count] [config.json]", args[0]);
        std::process::exit(1);
    }
    let count = match args.get(1) {
        Some(n) => n.parse()?,
        None => 10,
    };
    let config = match args.get(2) {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    let resources = InMemoryResourceProvider::new();
    resources.add(LOGO, logo_png()?)?;

    let renderer = RecordingDocument::new(config.page).with_items_per_page(ITEMS_PER_PAGE);
    let mut document = Document::from_config(renderer, &config);
    if config.default_font.is_none() {
        document.register_font(FontSpec::new("Helvetica").with_size(9.0), true);
    }

    let title = format!("Staff directory ({} employees)", count);
    let date = Local::now().format("%Y-%m-%d").to_string();
    document.set_header(move |editor| {
        let title_font = editor
            .fonts()
            .default_font()
            .map(|f| f.with_style(FontStyle::Bold).with_increased_size(4.0));
        editor.add_table(ColumnLayout::Relative(vec![1.0, 4.0]), |table| {
            table.set_width(TableWidth::max());
            table.add(ImageElement::new(LOGO).with_size(Size::new(40.0, 20.0)))?;
            let heading = Paragraph::new(title.as_str());
            table.add(match &title_font {
                Some(font) => heading.with_font(font.clone()),
                None => heading,
            })?;
            Ok(())
        })?;
        editor.add(Paragraph::new(format!("Generated {}", date)))?;
        Ok(())
    });

    let mut employees = random_employees(count);
    employees.sort_by(|a, b| a.department.cmp(&b.department).then(a.id.cmp(&b.id)));
    info!("Generated {} employees", employees.len());

    document.open()?;
    for group in employees.chunk_by(|a, b| a.department == b.department) {
        document.add(Paragraph::new(format!("{} ({})", group[0].department, group.len())))?;
        document.add_data_table(group, |table| {
            table.extractor("salary", |e: &Employee| format!("${}", e.salary))
        })?;
    }
    document.close()?;

    let recording = document.into_renderer();
    println!("{}", document_preview(&recording));

    for (index, page) in recording.layout(&resources)?.iter().enumerate() {
        let bottom = page.iter().map(|item| item.rect.bottom()).fold(f32::INFINITY, f32::min);
        let images: usize = page.iter().map(|item| item.images.len()).sum();
        println!(
            "page {}: {} item(s), {} image(s), content ends at y={:.1}",
            index + 1,
            page.len(),
            images,
            bottom
        );
    }
    info!("Employees schema: {:?}", Employee::schema().column_names());
    Ok(())
}
