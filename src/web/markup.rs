//! HTML fragments assembled outside templates: the blog body, the growth
//! chart and confirmation dialogs.

use std::fmt::Write;

use tetrapress::dashboard::ConfirmDialog;
use tetrapress::layout::RenderBlock;
use tetrapress::models::GrowthPoint;

use crate::web::helpers::escape_html;

const SECTION_IMAGE_ALT: &str = "Blog Image";

pub fn render_blocks(blocks: &[RenderBlock], contact_href: &str) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block, contact_href);
    }
    out
}

fn render_block(out: &mut String, block: &RenderBlock, contact_href: &str) {
    // Writing into a String cannot fail.
    let _ = match block {
        RenderBlock::CoverImage { url, alt } => write!(
            out,
            r#"<img class="cover-image" src="{}" alt="{}">"#,
            escape_html(url),
            escape_html(alt.as_deref().unwrap_or(SECTION_IMAGE_ALT)),
        ),
        RenderBlock::Heading { text } => {
            write!(out, r#"<h2 class="section-heading">{}</h2>"#, escape_html(text))
        }
        RenderBlock::Image { url } => write!(
            out,
            r#"<div class="section-image"><img src="{}" alt="{SECTION_IMAGE_ALT}"></div>"#,
            escape_html(url),
        ),
        RenderBlock::FloatedImage {
            url,
            side,
            paragraphs,
        } => {
            let _ = write!(
                out,
                r#"<div class="section-media"><img class="float-{side}" src="{}" alt="{SECTION_IMAGE_ALT}"><div class="section-media-text">"#,
                escape_html(url),
            );
            for text in paragraphs {
                push_paragraph(out, text);
            }
            write!(out, "</div></div>")
        }
        RenderBlock::Paragraph { text } => {
            push_paragraph(out, text);
            Ok(())
        }
        RenderBlock::CallToAction { text, button_label } => {
            let _ = write!(out, r#"<div class="cta-block">"#);
            if let Some(text) = text {
                let _ = write!(out, "<h3>{}</h3>", escape_html(text));
            }
            write!(
                out,
                r#"<a class="cta-button" href="{}">{}</a></div>"#,
                escape_html(contact_href),
                escape_html(button_label),
            )
        }
    };
}

fn push_paragraph(out: &mut String, text: &str) {
    let _ = write!(out, r#"<p class="section-paragraph">{}</p>"#, escape_html(text));
}

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 250.0;
const CHART_PAD: f64 = 32.0;

/// Inline SVG line chart of the growth series, scaled to its own maximum.
pub fn growth_chart_svg(points: &[GrowthPoint]) -> String {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0).max(1) as f64;
    let plot_w = CHART_WIDTH - 2.0 * CHART_PAD;
    let plot_h = CHART_HEIGHT - 2.0 * CHART_PAD;
    let step = if points.len() > 1 {
        plot_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = CHART_PAD + step * i as f64;
            let y = CHART_HEIGHT - CHART_PAD - (p.value as f64 / max) * plot_h;
            (x, y)
        })
        .collect();

    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg class="growth-chart" viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}" role="img" aria-label="User growth">"#
    );
    let _ = write!(
        svg,
        r#"<line class="axis" x1="{CHART_PAD}" y1="{y}" x2="{x2}" y2="{y}"/>"#,
        y = CHART_HEIGHT - CHART_PAD,
        x2 = CHART_WIDTH - CHART_PAD,
    );
    let _ = write!(svg, r#"<polyline class="series" fill="none" points="{polyline}"/>"#);
    for ((x, y), point) in coords.iter().zip(points) {
        let _ = write!(
            svg,
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="3"><title>{}: {}</title></circle><text x="{x:.1}" y="{label_y}" text-anchor="middle">{}</text>"#,
            escape_html(&point.label),
            point.value,
            escape_html(&point.label),
            label_y = CHART_HEIGHT - CHART_PAD / 3.0,
        );
    }
    svg.push_str("</svg>");
    svg
}

/// Modal overlay whose buttons post to `confirm_action` and `cancel_action`.
pub fn confirm_modal(dialog: &ConfirmDialog, confirm_action: &str, cancel_action: &str) -> String {
    format!(
        r#"<div class="modal-backdrop" role="dialog" aria-modal="true" aria-labelledby="confirm-title">
  <div class="modal-card">
    <h5 id="confirm-title">{title}</h5>
    <p>{message}</p>
    <div class="modal-actions">
      <form method="post" action="{cancel}"><button type="submit" class="btn btn-secondary">Cancel</button></form>
      <form method="post" action="{confirm}"><button type="submit" class="btn btn-brand">Confirm</button></form>
    </div>
  </div>
</div>"#,
        title = escape_html(dialog.title),
        message = escape_html(dialog.message),
        cancel = escape_html(cancel_action),
        confirm = escape_html(confirm_action),
    )
}
