//! Serves the trunk build embedded at compile time.
//!
//! Unknown paths fall back to `index.html` so the SPA can resolve its own
//! routes. When the bundle was never built the directory is empty and every
//! request answers 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

fn respond(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec());
    }

    debug!("no embedded asset for {request_path}, falling back to {INDEX}");
    match dir.get_file(INDEX) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use include_dir::File;

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            include_dir::DirEntry::File(File::new("index.html", b"<html>cards</html>")),
            include_dir::DirEntry::File(File::new("app.js", b"console.log(1)")),
        ],
    );

    static EMPTY: Dir = Dir::new("", &[]);

    #[actix_web::test]
    async fn serves_known_file_with_guessed_mime() {
        let resp = respond(&BUNDLE, "/app.js");
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[actix_web::test]
    async fn unknown_route_falls_back_to_index() {
        let resp = respond(&BUNDLE, "/cards/add");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"<html>cards</html>");
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        let resp = respond(&EMPTY, "/");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
