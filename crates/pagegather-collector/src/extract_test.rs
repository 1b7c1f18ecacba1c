use super::*;

fn card(title: &str, date: &str) -> String {
    format!(
        r#"<div class="card"><h5 class="card-title">{title}</h5><p class="text-muted">{date}</p></div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!("<html><body>{}</body></html>", cards.join("\n"))
}

#[test]
fn extracts_paired_titles_and_dates_in_document_order() {
    let html = page(&[
        card("Census microdata", "December 2021"),
        card("Transit delays", "January 2022"),
    ]);
    let records = extract_records(&html, &Selectors::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Census microdata");
    assert_eq!(records[0].raw_date, "December 2021");
    assert_eq!(records[0].year.as_deref(), Some("2021"));
    assert_eq!(records[1].title, "Transit delays");
    assert_eq!(records[1].year.as_deref(), Some("2022"));
}

#[test]
fn page_with_no_cards_yields_zero_records() {
    let records = extract_records("<html><body><p>nothing here</p></body></html>", &Selectors::default());
    assert!(records.is_empty());
}

#[test]
fn mismatched_counts_truncate_to_the_shorter_side() {
    // 3 titles, 2 dates: only the aligned prefix survives.
    let html = page(&[
        card("A", "2019"),
        card("B", "2020"),
        r#"<div class="card"><h5 class="card-title">C</h5></div>"#.to_owned(),
    ]);
    let records = extract_records(&html, &Selectors::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "A");
    assert_eq!(records[1].title, "B");
}

#[test]
fn truncation_is_deterministic_across_runs() {
    let html = page(&[
        card("A", "2019"),
        r#"<div class="card"><h5 class="card-title">B</h5></div>"#.to_owned(),
    ]);
    let first = extract_records(&html, &Selectors::default());
    let second = extract_records(&html, &Selectors::default());
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[test]
fn nested_markup_inside_title_is_flattened_and_trimmed() {
    let html = r#"<div class="card">
        <h5 class="card-title"> <a href="/d/1">Traffic <em>counts</em></a> </h5>
        <p class="text-muted">March 2020</p>
    </div>"#;
    let records = extract_records(html, &Selectors::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Traffic counts");
}

#[test]
fn year_from_month_name_date() {
    assert_eq!(extract_year("December 2021").as_deref(), Some("2021"));
}

#[test]
fn year_absent_when_no_digits() {
    assert!(extract_year("n/a").is_none());
}

#[test]
fn year_first_run_of_four_digits_wins() {
    assert_eq!(extract_year("1999-12-01").as_deref(), Some("1999"));
}

#[test]
fn year_ignores_short_digit_runs() {
    assert!(extract_year("12/31, vol. 7").is_none());
}

#[test]
fn custom_selectors_are_honoured() {
    let html = r#"<ul>
        <li><span class="entry-name">A</span><span class="entry-when">May 2018</span></li>
        <li><span class="entry-name">B</span><span class="entry-when">June 2018</span></li>
    </ul>"#;
    let selectors = Selectors::new(".entry-name", ".entry-when").unwrap();
    let records = extract_records(html, &selectors);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].title, "B");
    assert_eq!(records[1].year.as_deref(), Some("2018"));
}

#[test]
fn invalid_selector_is_a_constructor_error() {
    let result = Selectors::new("<<not a selector", ".text-muted");
    assert!(matches!(
        result,
        Err(CollectError::InvalidSelector { .. })
    ));
}
