use std::io::Write;

use anyhow::{Context, Result};

/// (author, [(title, average_rating, num_pages)])
const CATALOGUE: &[(&str, &[(&str, f64, u32)])] = &[
    (
        "Ursula K. Le Guin",
        &[
            ("A Wizard of Earthsea", 3.99, 183),
            ("The Left Hand of Darkness", 4.08, 304),
            ("The Dispossessed", 4.21, 387),
            ("The Lathe of Heaven", 4.09, 184),
            ("Tehanu", 3.88, 281),
        ],
    ),
    (
        "Terry Pratchett",
        &[
            ("Guards! Guards!", 4.30, 355),
            ("Small Gods", 4.30, 400),
            ("Night Watch", 4.50, 480),
            ("Going Postal", 4.38, 394),
            ("Thud!", 4.23, 448),
            ("Making Money", 4.25, 394),
        ],
    ),
    (
        "Toni Morrison",
        &[
            ("Beloved", 3.80, 324),
            ("Song of Solomon", 4.07, 337),
            ("Sula", 3.87, 192),
            ("Jazz", 3.80, 229),
        ],
    ),
    (
        "Kazuo Ishiguro",
        &[
            ("The Remains of the Day", 4.12, 245),
            ("Never Let Me Go", 3.84, 288),
            ("When We Were Orphans", 3.58, 336),
            ("The Buried Giant", 3.51, 317),
        ],
    ),
];

fn main() -> Result<()> {
    let output_path = "sample_books.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    // Same layout as the public dataset, including the padded header.
    writer.write_record([
        "bookID",
        "title",
        "authors",
        "average_rating",
        "isbn",
        "isbn13",
        "language_code",
        "  num_pages",
        "ratings_count",
        "text_reviews_count",
        "publication_date",
        "publisher",
    ])?;

    let mut book_id = 1u32;
    for (author_no, (author, titles)) in CATALOGUE.iter().enumerate() {
        for (title_no, (title, rating, pages)) in titles.iter().enumerate() {
            // Spread publication dates over 1996..=2019.
            let year = 1996 + ((author_no * 7 + title_no * 5) % 24);
            let month = 1 + (book_id % 12);
            let day = 1 + (book_id * 3 % 28);
            let published = if book_id == 7 {
                // 31 November does not exist: loads with a missing date.
                "11/31/2000".to_string()
            } else {
                format!("{month}/{day}/{year}")
            };

            writer.write_record([
                book_id.to_string(),
                title.to_string(),
                author.to_string(),
                format!("{rating:.2}"),
                format!("{:010}", 439_000_000 + book_id),
                format!("978{:010}", 439_000_000 + book_id),
                "eng".to_string(),
                pages.to_string(),
                (1_000 + book_id * 137).to_string(),
                (40 + book_id * 11).to_string(),
                published,
                "Sample House".to_string(),
            ])?;
            book_id += 1;
        }
    }
    writer.flush()?;
    drop(writer);

    // A row with an unquoted comma in the authors field: one column too many.
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(output_path)
        .with_context(|| format!("reopening {output_path}"))?;
    writeln!(
        file,
        "{book_id},Good Omens,Terry Pratchett, Neil Gaiman,4.25,0060853980,9780060853983,eng,491,1000,100,11/28/2006,William Morrow"
    )?;

    println!("Wrote {book_id} books (one malformed) to {output_path}");
    Ok(())
}
