use crate::domain::model::TargetMetrics;

pub fn fetching_banner(domain: &str) -> String {
    format!("Получение данных для домена: {}...", domain)
}

/// Plain-text block printed on success. Domain rating is shown with no
/// decimals.
pub fn render_report(metrics: &TargetMetrics) -> String {
    let lines = [
        String::new(),
        "--- Результаты Ahrefs ---".to_string(),
        format!("Домен:           {}", metrics.target),
        format!("Domain Rating (DR): {:.0}", metrics.domain_rating),
        format!("Бэклинки:        {}", metrics.backlinks),
        format!("Ссылающиеся домены: {}", metrics.refdomains),
        format!("Органические ключевые слова: {}", metrics.organic_keywords),
        format!("Органический трафик: {}", metrics.organic_traffic),
        "-------------------------".to_string(),
    ];

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
