//! Rendering of a GZ curve as a text table or JSON.

use std::fmt::Write as _;

use anyhow::Result;
use hull_mesh::HullParams;
use hydrostatics::GzCurve;
use serde::Serialize;

/// One row of the JSON report.
#[derive(Debug, Serialize)]
struct Row {
    heel_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    kn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    hull: &'a HullParams,
    kg: f64,
    draft: f64,
    curve: Vec<Row>,
}

/// Table with one line per heel angle; failed angles print their error.
pub fn render_text(curve: &GzCurve) -> String {
    let mut out = String::from("Angle (deg)   KN (m)     GZ (m)");
    for entry in curve.entries() {
        out.push('\n');
        // Writing into a String cannot fail
        let _ = match entry {
            Ok(p) => write!(out, "{:6.1}     {:7.4}   {:7.4}", p.heel_deg, p.kn, p.gz),
            Err(e) => write!(out, "{:6.1}     error: {}", e.heel_deg, e.source),
        };
    }
    out
}

/// Pretty-printed JSON report including the hull and run parameters.
pub fn render_json(hull: &HullParams, curve: &GzCurve) -> Result<String> {
    let rows = curve
        .entries()
        .iter()
        .map(|entry| match entry {
            Ok(p) => Row {
                heel_deg: p.heel_deg,
                kn: Some(p.kn),
                gz: Some(p.gz),
                volume: Some(p.volume),
                error: None,
            },
            Err(e) => Row {
                heel_deg: e.heel_deg,
                kn: None,
                gz: None,
                volume: None,
                error: Some(e.source.to_string()),
            },
        })
        .collect();

    let report = Report {
        hull,
        kg: curve.kg,
        draft: curve.draft,
        curve: rows,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::CurveConfig;
    use hull_mesh::assemble_hull;
    use hydrostatics::gz_curve;

    fn curve(draft: f64) -> (HullParams, GzCurve) {
        let params = HullParams::new(100.0, 20.0, 10.0, 11, 11).unwrap();
        let hull = assemble_hull(&params).unwrap();
        let conf = CurveConfig::new(2.0, draft, 30.0, 4).unwrap();
        (params, gz_curve(&hull, &conf))
    }

    #[test]
    fn test_text_table_layout() {
        let (_, curve) = curve(6.0);
        let text = render_text(&curve);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Angle (deg)   KN (m)     GZ (m)");
        assert!(lines[1].starts_with("   0.0     "));
        assert!(lines[4].starts_with("  30.0     "));
    }

    #[test]
    fn test_text_reports_failures() {
        let (_, curve) = curve(11.0);
        let text = render_text(&curve);
        assert!(text.lines().skip(1).all(|l| l.contains("error: No submerged region")));
    }

    #[test]
    fn test_json_report() {
        let (params, curve) = curve(6.0);
        let json: serde_json::Value = serde_json::from_str(&render_json(&params, &curve).unwrap()).unwrap();

        assert_eq!(json["kg"], 2.0);
        assert_eq!(json["hull"]["nx"], 11);
        assert_eq!(json["curve"].as_array().unwrap().len(), 4);
        assert!(json["curve"][0]["error"].is_null());
        assert!(json["curve"][2]["gz"].is_number());
    }
}
