use crate::models::{error::AppError, trend::ChartTable};
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// File name for a commodity's exported chart data, e.g.
/// `harga-bawang-merah-2025-07-25.csv`.
pub fn export_filename(commodity: &str, date: Option<NaiveDate>) -> String {
    let slug = commodity
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    let mut name = String::from("harga");
    if !slug.is_empty() {
        name.push('-');
        name.push_str(&slug);
    }
    if let Some(date) = date {
        name.push_str(&date.format("-%Y-%m-%d").to_string());
    }
    name.push_str(".csv");
    name
}

/// `data:` URL carrying the CSV text.
pub fn csv_data_url(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8,{}", urlencoding::encode(csv))
}

/// Serializes the table and hands it to the browser as a file download.
pub fn download_csv(table: &ChartTable, filename: &str) -> Result<(), AppError> {
    let csv = table.to_csv()?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::ExportError("No document available".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::ExportError(format!("Failed to create link: {e:?}")))?
        .dyn_into()
        .map_err(|_| AppError::ExportError("Created element is not a link".to_string()))?;

    anchor.set_href(&csv_data_url(&csv));
    anchor.set_download(filename);
    anchor.click();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 25);
        assert_eq!(
            export_filename("Bawang Merah", date),
            "harga-bawang-merah-2025-07-25.csv"
        );
        assert_eq!(
            export_filename("Cabai Merah (Keriting)", None),
            "harga-cabai-merah-keriting.csv"
        );
        assert_eq!(export_filename("", None), "harga.csv");
    }

    #[test]
    fn test_csv_data_url_is_encoded() {
        let url = csv_data_url("Tanggal,Pasar Kawali\n2025-07-25,100\n");
        assert!(url.starts_with("data:text/csv;charset=utf-8,"));
        assert!(url.contains("Pasar%20Kawali"));
        assert!(url.contains("%0A"));
        assert!(!url.contains(' '));
    }
}
