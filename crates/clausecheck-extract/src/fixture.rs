//! In-memory PDF builders for tests.
//!
//! Each entry of `pages` becomes one page; `\n` splits a page into separate
//! text lines. Only ASCII text survives the Type1 font encoding.

use lopdf::content::{Content, Operation};
use lopdf::encryption::{decrypt_object, get_encryption_key};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

const LINE_HEIGHT: i64 = 14;

const FILE_ID: [u8; 16] = *b"clausecheck-fix!";

/// Build a PDF whose pages carry the given text, in order.
pub fn pdf_with_pages(pages: &[&str]) -> lopdf::Result<Vec<u8>> {
    save(build(pages)?)
}

/// Like [`pdf_with_pages`], but RC4-encrypted (standard handler, revision 2)
/// with an empty user password, as print-restricted documents usually are.
///
/// No `/U` check value is written, so the empty password is always accepted.
pub fn encrypted_pdf_with_pages(pages: &[&str]) -> lopdf::Result<Vec<u8>> {
    let mut doc = build(pages)?;
    encrypt(&mut doc, None)?;
    save(doc)
}

/// An encrypted PDF whose `/U` check value rejects the empty user password.
pub fn password_protected_pdf(pages: &[&str]) -> lopdf::Result<Vec<u8>> {
    let mut doc = build(pages)?;
    encrypt(&mut doc, Some(vec![0xA5; 32]))?;
    save(doc)
}

fn build(pages: &[&str]) -> lopdf::Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let mut operations = Vec::new();
        for (i, line) in page.lines().enumerate() {
            let y = 760 - LINE_HEIGHT * i as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    Ok(doc)
}

/// Encrypt every stream with the key derived from the empty user password.
fn encrypt(doc: &mut Document, user_check: Option<Vec<u8>>) -> lopdf::Result<()> {
    let mut handler = dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "O" => Object::String(vec![0x5A; 32], StringFormat::Hexadecimal),
        "P" => -44,
    };
    if let Some(check) = user_check {
        handler.set("U", Object::String(check, StringFormat::Hexadecimal));
    }
    let handler_id = doc.add_object(handler);
    doc.trailer.set("Encrypt", handler_id);
    let file_id = Object::String(FILE_ID.to_vec(), StringFormat::Hexadecimal);
    doc.trailer.set("ID", vec![file_id.clone(), file_id]);

    let key = get_encryption_key(doc, "", false)?;
    for (&id, object) in doc.objects.iter_mut() {
        if !matches!(object, Object::Stream(_)) {
            continue;
        }
        // RC4 is symmetric, so decrypting plaintext yields the ciphertext.
        let sealed = decrypt_object(&key, id, object)?;
        if let Object::Stream(stream) = object {
            stream.set_content(sealed);
        }
    }
    Ok(())
}

fn save(mut doc: Document) -> lopdf::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
