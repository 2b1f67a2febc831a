use crate::models::{Article, Cta, Section};

use super::block::{FloatSide, RenderBlock};
use super::viewport::LayoutContext;

/// Counters threaded through a single forward pass over the sections.
#[derive(Debug, Default, Clone, Copy)]
struct SectionWalk {
    heading_count: usize,
    image_float: usize,
}

impl SectionWalk {
    fn section(&mut self, section: &Section, ctx: LayoutContext, out: &mut Vec<RenderBlock>) {
        if let Some(heading) = &section.heading {
            self.heading_count += 1;
            out.push(RenderBlock::Heading {
                text: heading.clone(),
            });
        }

        let paragraphs = section.content.as_deref().unwrap_or_default();

        match &section.image {
            Some(url) => {
                let side = FloatSide::alternating(self.image_float);
                self.image_float += 1;

                if ctx.narrow {
                    out.push(RenderBlock::Image { url: url.clone() });
                    push_paragraphs(paragraphs, out);
                } else {
                    out.push(RenderBlock::FloatedImage {
                        url: url.clone(),
                        side,
                        paragraphs: paragraphs.to_vec(),
                    });
                }
            }
            None => push_paragraphs(paragraphs, out),
        }
    }

    fn cta_due(&self) -> bool {
        self.heading_count > 0 && self.heading_count % 2 == 0
    }
}

fn push_paragraphs(paragraphs: &[String], out: &mut Vec<RenderBlock>) {
    out.extend(
        paragraphs
            .iter()
            .map(|text| RenderBlock::Paragraph { text: text.clone() }),
    );
}

fn cta_block(cta: &Cta) -> RenderBlock {
    RenderBlock::CallToAction {
        text: cta.text.clone(),
        button_label: cta.button_label().to_string(),
    }
}

/// Lays out the article sections.
///
/// A call-to-action follows every section that leaves the running heading
/// count positive and even, and one more always closes the article. The two
/// can land back to back when the last section carries an even-numbered
/// heading.
pub fn layout_sections(article: &Article, ctx: LayoutContext) -> Vec<RenderBlock> {
    let mut walk = SectionWalk::default();
    let mut blocks = Vec::with_capacity(article.sections.len() * 2 + 1);

    for section in &article.sections {
        walk.section(section, ctx, &mut blocks);

        if let Some(cta) = &article.cta {
            if walk.cta_due() {
                blocks.push(cta_block(cta));
            }
        }
    }

    if let Some(cta) = &article.cta {
        blocks.push(cta_block(cta));
    }

    blocks
}

/// Full article body: the cover image (when present) followed by the sections.
pub fn layout_article(article: &Article, ctx: LayoutContext) -> Vec<RenderBlock> {
    let mut blocks = Vec::with_capacity(article.sections.len() * 2 + 2);

    if let Some(url) = &article.image {
        blocks.push(RenderBlock::CoverImage {
            url: url.clone(),
            alt: article.title.clone(),
        });
    }

    blocks.extend(layout_sections(article, ctx));
    blocks
}
