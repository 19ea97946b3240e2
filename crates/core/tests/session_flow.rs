//! Full design session driven through the public API with in-memory services.

use std::cell::RefCell;
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use mentor_core::advice::{request_enhancements, request_feedback, request_wireframe};
use mentor_core::publish::publish;
use mentor_core::{
    localize, ComponentLibrary, CompletionRequest, CompletionService, EnhancementCategory,
    FeedbackCategory, Fidelity, FileUpload, HostingService, Language, PersistenceError,
    ServiceError, ServiceKind, Session, SessionError, Translator, VersionError,
};

struct EchoModel {
    seen: RefCell<Vec<CompletionRequest>>,
}

impl CompletionService for EchoModel {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        self.seen.borrow_mut().push(request.clone());
        Ok(format!("\n{} tokens max\n", request.max_tokens))
    }
}

struct Shout;

impl Translator for Shout {
    fn translate(&self, text: &str, target: Language) -> Result<String, ServiceError> {
        Ok(format!("[{}] {}", target.code(), text.to_uppercase()))
    }
}

#[derive(Default)]
struct Repo {
    files: RefCell<Vec<(String, String, Vec<u8>)>>,
}

impl HostingService for Repo {
    fn create_file(&self, credential: &str, upload: &FileUpload<'_>) -> Result<(), ServiceError> {
        if credential != "token" {
            return Err(ServiceError::Unauthorized {
                service: ServiceKind::Hosting,
            });
        }
        let mut files = self.files.borrow_mut();
        if files
            .iter()
            .any(|(repo, path, _)| repo == upload.repository && path == upload.path)
        {
            return Err(ServiceError::Rejected {
                service: ServiceKind::Hosting,
                what: format!("{} exists", upload.path),
            });
        }
        files.push((
            upload.repository.to_string(),
            upload.path.to_string(),
            upload.content.to_vec(),
        ));
        Ok(())
    }
}

fn png_bytes(width: u32, height: u32, shade: u8) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([shade, 0, 0, 255]));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn upload_save_advise_and_publish() {
    let mut session = Session::new(Language::En);
    assert_eq!(
        session.active_image().unwrap_err(),
        SessionError::NoActiveImage
    );

    assert_eq!(session.upload(&png_bytes(8, 6, 10)).unwrap(), (8, 6));
    assert_eq!(session.save_version().unwrap(), 0);
    assert_eq!(session.upload(&png_bytes(5, 5, 200)).unwrap(), (5, 5));
    assert_eq!(session.save_version().unwrap(), 1);

    let versions = session.versions();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions.current(), Some(1));
    assert_eq!(versions.get(0).unwrap().dimensions(), (8, 6));
    assert_eq!(versions.index_for_label(2).unwrap(), 1);
    assert_eq!(
        versions.index_for_label(3).unwrap_err(),
        VersionError::IndexOutOfRange { index: 2, len: 2 }
    );

    let model = EchoModel {
        seen: RefCell::new(Vec::new()),
    };
    let feedback = request_feedback(&model, "Uploaded design", FeedbackCategory::All).unwrap();
    assert_eq!(feedback, "300 tokens max");
    request_enhancements(&model, EnhancementCategory::Typography).unwrap();
    let wireframe = request_wireframe(&model, "Signup form", Fidelity::High).unwrap();
    assert_eq!(wireframe, "500 tokens max");
    assert_eq!(model.seen.borrow().len(), 3);

    let repo = Repo::default();
    let receipt = publish(&repo, session.active_image().unwrap(), "site", "token").unwrap();
    assert_eq!(receipt.path, "design_site.png");

    let again = publish(&repo, session.active_image().unwrap(), "site", "token").unwrap_err();
    assert!(matches!(
        again,
        PersistenceError::Upload(ServiceError::Rejected { .. })
    ));

    let stored = &repo.files.borrow()[0].2;
    let decoded = image::load_from_memory(stored).unwrap().into_rgba8();
    assert_eq!(decoded.dimensions(), (5, 5));
    assert_eq!(decoded.get_pixel(0, 0), &Rgba([200, 0, 0, 255]));

    assert_eq!(session.close().versions_saved, 2);
}

#[test]
fn failed_upload_leaves_session_untouched() {
    let mut session = Session::new(Language::Fr);
    session.upload(&png_bytes(3, 3, 1)).unwrap();

    let err = session.upload(b"GIF89a not really").unwrap_err();
    assert_eq!(err, SessionError::UnsupportedImage);
    assert_eq!(session.uploaded().unwrap().dimensions(), (3, 3));
    assert!(session.versions().is_empty());
}

#[test]
fn composition_and_localization_are_independent_of_the_session() {
    let library = ComponentLibrary::builtin();
    let page = library.compose(&["Header", "Footer"]).unwrap();
    assert!(page.markup.contains("<header>"));
    assert!(page.markup.contains("<footer>"));

    let label = localize(&Shout, "Save version", Language::De).unwrap();
    assert_eq!(label, "[de] SAVE VERSION");
}

#[test]
fn publish_after_reupload_sends_the_latest_upload() {
    let mut session = Session::new(Language::En);
    session.upload(&png_bytes(4, 4, 10)).unwrap();
    session.save_version().unwrap();
    session.upload(&png_bytes(4, 4, 99)).unwrap();

    let repo = Repo::default();
    publish(&repo, session.active_image().unwrap(), "site", "token").unwrap();

    let stored = &repo.files.borrow()[0].2;
    let decoded = image::load_from_memory(stored).unwrap().into_rgba8();
    assert_eq!(decoded.get_pixel(0, 0), &Rgba([99, 0, 0, 255]));
    assert_eq!(session.versions().len(), 1);
}
