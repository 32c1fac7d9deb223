//! Counting mock backend shared by the integration tests.

#![allow(dead_code)]

use folio_page::{Document, Plugin, PluginFunctions};
use folio_types::{
    BackendData, BackendFailure, FormField, FormFieldKind, Link, LinkTarget, PageError, PageImage,
    PixelFormat, Rectangle, Signature, SignatureState, Surface,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const WIDTH: f64 = 100.0;
pub const HEIGHT: f64 = 200.0;

/// Number of calls into each backend capability.
#[derive(Debug, Default)]
pub struct Calls {
    pub init: AtomicUsize,
    pub clear: AtomicUsize,
    pub clear_with_data: AtomicUsize,
    pub label: AtomicUsize,
    pub render: AtomicUsize,
    pub content: AtomicUsize,
    pub image_drops: AtomicUsize,
}

impl Calls {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn init(&self) -> usize {
        self.init.load(Ordering::SeqCst)
    }

    pub fn clear(&self) -> usize {
        self.clear.load(Ordering::SeqCst)
    }

    pub fn clear_with_data(&self) -> usize {
        self.clear_with_data.load(Ordering::SeqCst)
    }

    pub fn label(&self) -> usize {
        self.label.load(Ordering::SeqCst)
    }

    pub fn render(&self) -> usize {
        self.render.load(Ordering::SeqCst)
    }

    pub fn content(&self) -> usize {
        self.content.load(Ordering::SeqCst)
    }

    pub fn image_drops(&self) -> usize {
        self.image_drops.load(Ordering::SeqCst)
    }
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

/// Backend page state.
#[derive(Debug)]
pub struct MockPage {
    pub index: usize,
    pub text: String,
}

/// Backend image state; counts its own drops.
pub struct MockImage {
    pub shade: u8,
    calls: Arc<Calls>,
}

impl Drop for MockImage {
    fn drop(&mut self) {
        bump(&self.calls.image_drops);
    }
}

/// Mandatory capabilities only. Pages are `WIDTH` x `HEIGHT`.
pub fn minimal(calls: &Arc<Calls>) -> PluginFunctions {
    let init_calls = Arc::clone(calls);
    let clear_calls = Arc::clone(calls);
    let render_calls = Arc::clone(calls);
    PluginFunctions::new(
        move |page| {
            bump(&init_calls.init);
            page.set_width(WIDTH);
            page.set_height(HEIGHT);
            Ok(BackendData::new(MockPage {
                index: page.index(),
                text: format!("text of page {}", page.index() as u128 + 1),
            }))
        },
        move |_page, data| {
            bump(&clear_calls.clear);
            if data.is_some_and(|d| d.is::<MockPage>()) {
                bump(&clear_calls.clear_with_data);
            }
            Ok(())
        },
        move |_page, data, surface, printing| {
            bump(&render_calls.render);
            let page = data
                .downcast_ref::<MockPage>()
                .ok_or_else(|| BackendFailure::failed("foreign page state"))?;
            let shade = if printing { 0 } else { page.index as u8 };
            surface.fill(&[shade, shade, shade, 255])
        },
    )
}

/// Init always fails with `failure`.
pub fn failing_init(calls: &Arc<Calls>, failure: BackendFailure) -> PluginFunctions {
    let init_calls = Arc::clone(calls);
    let clear_calls = Arc::clone(calls);
    PluginFunctions::new(
        move |_page| {
            bump(&init_calls.init);
            Err(PageError::Backend(failure.clone()))
        },
        move |_page, data| {
            bump(&clear_calls.clear);
            if data.is_some() {
                bump(&clear_calls.clear_with_data);
            }
            Ok(())
        },
        |_page, _data, _surface, _printing| Ok(()),
    )
}

/// Labels every page with `label(index)`.
pub fn labelled<L>(calls: &Arc<Calls>, label: L) -> PluginFunctions
where
    L: Fn(usize) -> Option<String> + Send + Sync + 'static,
{
    let label_calls = Arc::clone(calls);
    minimal(calls).with_label(move |page, _data| {
        bump(&label_calls.label);
        Ok(label(page.index()))
    })
}

/// Every optional capability, each answering with fixed content.
pub fn full(calls: &Arc<Calls>) -> PluginFunctions {
    let c = |calls: &Arc<Calls>| Arc::clone(calls);
    let (search, links, forms, images, surface, text, selection, signatures) = (
        c(calls),
        c(calls),
        c(calls),
        c(calls),
        c(calls),
        c(calls),
        c(calls),
        c(calls),
    );
    labelled(calls, |index| Some((index + 1).to_string()))
        .with_search_text(move |_page, _data, needle| {
            bump(&search.content);
            if needle == "folio" {
                Ok(vec![
                    Rectangle::new(10.0, 10.0, 40.0, 22.0),
                    Rectangle::new(50.0, 90.0, 80.0, 102.0),
                ])
            } else {
                Ok(Vec::new())
            }
        })
        .with_links(move |_page, _data| {
            bump(&links.content);
            Ok(vec![
                Link::new(
                    Rectangle::new(10.0, 180.0, 90.0, 190.0),
                    LinkTarget::Uri("https://example.org/spec".into()),
                ),
                Link::new(
                    Rectangle::new(10.0, 160.0, 90.0, 170.0),
                    LinkTarget::Named("NextPage".into()),
                ),
            ])
        })
        .with_form_fields(move |_page, _data| {
            bump(&forms.content);
            Ok(vec![FormField::new(
                "invoice.total",
                FormFieldKind::Text,
                Rectangle::new(20.0, 20.0, 80.0, 30.0),
            )
            .with_value("42.00")])
        })
        .with_images(move |_page, _data| {
            bump(&images.content);
            Ok(vec![PageImage::new(Rectangle::new(0.0, 0.0, 50.0, 50.0))
                .with_data(BackendData::new(MockImage {
                    shade: 200,
                    calls: Arc::clone(&images),
                }))])
        })
        .with_image_surface(move |_page, _data, image| {
            bump(&surface.content);
            let shade = image
                .data
                .as_ref()
                .and_then(|d| d.downcast_ref::<MockImage>())
                .map(|i| i.shade)
                .ok_or_else(|| PageError::invalid_arguments("image has no backend data"))?;
            let mut out = Surface::new(2, 2, PixelFormat::Gray);
            out.fill(&[shade])?;
            Ok(out)
        })
        .with_text(move |_page, data, region| {
            bump(&text.content);
            let page = data
                .downcast_ref::<MockPage>()
                .ok_or_else(|| BackendFailure::failed("foreign page state"))?;
            if region.width() <= 0.0 {
                return Ok(String::new());
            }
            Ok(page.text.clone())
        })
        .with_selection(move |_page, _data, region| {
            bump(&selection.content);
            Ok(vec![region])
        })
        .with_signatures(move |_page, _data| {
            bump(&signatures.content);
            Ok(vec![Signature::new(
                SignatureState::Valid,
                Rectangle::new(0.0, 0.0, 60.0, 20.0),
            )
            .with_signer("Jane Roe")])
        })
}

pub fn open(functions: PluginFunctions) -> Arc<Document> {
    Document::new(Arc::new(
        Plugin::new("mock", functions).with_mime_type("application/x-mock"),
    ))
}
