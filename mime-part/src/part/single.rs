use super::{Content, Disposition, MimePart, DEFAULT_CONTENT_TYPE};

/// The single MIME part.
///
/// Represents a leaf (non-multipart) node of a MIME tree: its
/// metadata and its raw body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SinglePart {
    /// The MIME type of the part.
    content_type: String,

    /// The optional filename, used by the `Content-Disposition` and
    /// `Content-Type` headers.
    filename: Option<String>,

    /// The optional content identifier, referenced by `cid:` URLs
    /// from sibling HTML parts.
    content_id: Option<String>,

    /// The optional `Content-Description` header.
    description: Option<String>,

    /// The optional presentation of the part.
    disposition: Option<Disposition>,

    /// The raw body of the part.
    body: Vec<u8>,
}

impl Default for SinglePart {
    fn default() -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_owned(),
            filename: Default::default(),
            content_id: Default::default(),
            description: Default::default(),
            disposition: Default::default(),
            body: Default::default(),
        }
    }
}

impl SinglePart {
    pub fn new(content_type: impl ToString, body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.to_string(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn set_content_type(&mut self, content_type: impl ToString) {
        self.content_type = content_type.to_string();
    }

    pub fn with_content_type(mut self, content_type: impl ToString) -> Self {
        self.set_content_type(content_type);
        self
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl ToString) {
        self.filename = Some(filename.to_string());
    }

    pub fn set_some_filename(&mut self, filename: Option<impl ToString>) {
        self.filename = filename.map(|f| f.to_string());
    }

    pub fn with_filename(mut self, filename: impl ToString) -> Self {
        self.set_filename(filename);
        self
    }

    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }

    pub fn set_content_id(&mut self, id: impl ToString) {
        self.content_id = Some(id.to_string());
    }

    pub fn set_some_content_id(&mut self, id: Option<impl ToString>) {
        self.content_id = id.map(|id| id.to_string());
    }

    pub fn with_content_id(mut self, id: impl ToString) -> Self {
        self.set_content_id(id);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl ToString) {
        self.description = Some(description.to_string());
    }

    pub fn set_some_description(&mut self, description: Option<impl ToString>) {
        self.description = description.map(|d| d.to_string());
    }

    pub fn with_description(mut self, description: impl ToString) -> Self {
        self.set_description(description);
        self
    }

    pub fn disposition(&self) -> Option<Disposition> {
        self.disposition
    }

    pub fn set_disposition(&mut self, disposition: Disposition) {
        self.disposition = Some(disposition);
    }

    pub fn set_some_disposition(&mut self, disposition: Option<Disposition>) {
        self.disposition = disposition;
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.set_disposition(disposition);
        self
    }

    pub fn is_inline(&self) -> bool {
        self.disposition == Some(Disposition::Inline)
    }

    pub fn is_attachment(&self) -> bool {
        self.disposition == Some(Disposition::Attachment)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.set_body(body);
        self
    }

    /// Drop the raw body, leaving the part empty.
    pub fn clear_body(&mut self) {
        self.body = Vec::new();
    }
}

impl MimePart for SinglePart {
    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn content(&self) -> Content<'_> {
        if self.body.is_empty() {
            Content::None
        } else {
            Content::Data(&self.body)
        }
    }
}
