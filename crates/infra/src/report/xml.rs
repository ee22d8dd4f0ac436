//! XML rendering of the extension report.
//!
//! Layout (one `entry` per extension, keys ascending):
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <map>
//!   <entry>
//!     <string>.java</string>
//!     <data>
//!       <files>2</files>
//!       <emptyLines>10</emptyLines>
//!       <totalLines>120</totalLines>
//!     </data>
//!   </entry>
//! </map>
//! ```
//!
//! This is the shape earlier releases produced, so existing consumers of
//! `tlocc-result.xml` keep working.

use std::path::Path;

use encoding_rs::Encoding;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use tlocc_domain::{CountResult, ExtensionKey, ExtensionReport};
use tlocc_ports::report::ReportWriter;
use tlocc_shared_kernel::{InfrastructureError, Result, TloccError};
use tracing::debug;

use crate::persistence::FileWriter;

const ROOT_TAG: &str = "map";
const ENTRY_TAG: &str = "entry";
const KEY_TAG: &str = "string";
const VALUE_TAG: &str = "data";
const FILES_TAG: &str = "files";
const EMPTY_LINES_TAG: &str = "emptyLines";
const TOTAL_LINES_TAG: &str = "totalLines";

/// Writes the report as XML in the configured encoding.
#[derive(Debug, Clone, Copy)]
pub struct XmlReportWriter {
    encoding: &'static Encoding,
}

impl XmlReportWriter {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Encode the rendered document. UTF-16 has no encoder and falls back to
    /// UTF-8; unmappable characters become numeric character references.
    pub fn encode(&self, report: &ExtensionReport) -> std::io::Result<Vec<u8>> {
        let output = self.encoding.output_encoding();
        let xml = render_xml(report, output.name())?;
        let (bytes, _, unmappable) = output.encode(&xml);
        if unmappable {
            debug!(
                encoding = output.name(),
                "report contains characters written as character references"
            );
        }
        Ok(bytes.into_owned())
    }
}

impl Default for XmlReportWriter {
    fn default() -> Self {
        Self::new(encoding_rs::UTF_8)
    }
}

impl ReportWriter for XmlReportWriter {
    fn prepare(&self, output_dir: &Path) -> Result<()> {
        FileWriter::ensure_dir(output_dir).map_err(|source| {
            InfrastructureError::DirectoryCreateFailed {
                path: output_dir.to_path_buf(),
                source,
            }
            .into()
        })
    }

    fn write_report(&self, report: &ExtensionReport, destination: &Path) -> Result<()> {
        let bytes = self
            .encode(report)
            .map_err(|err| write_failed(destination, err))?;
        FileWriter::atomic_write(destination, &bytes)
            .map_err(|err| write_failed(destination, err))?;
        Ok(())
    }
}

fn write_failed(path: &Path, err: std::io::Error) -> TloccError {
    InfrastructureError::ReportWriteFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
        source: Some(Box::new(err)),
    }
    .into()
}

/// Render `report` as an XML document whose declaration names `encoding`.
pub fn render_xml(report: &ExtensionReport, encoding: &str) -> std::io::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let decl = BytesDecl::new("1.0", Some(encoding), None);
    emit(&mut writer, Event::Decl(decl))?;
    open(&mut writer, ROOT_TAG)?;
    for (key, bucket) in report {
        write_entry(&mut writer, key, bucket)?;
    }
    close(&mut writer, ROOT_TAG)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(io_error)?;
    xml.push('\n');
    Ok(xml)
}

fn write_entry(
    writer: &mut Writer<Vec<u8>>,
    key: &ExtensionKey,
    bucket: &CountResult,
) -> std::io::Result<()> {
    open(writer, ENTRY_TAG)?;
    write_leaf(writer, KEY_TAG, key.as_str())?;
    open(writer, VALUE_TAG)?;
    write_leaf(writer, FILES_TAG, &bucket.files().to_string())?;
    write_leaf(writer, EMPTY_LINES_TAG, &bucket.empty_lines().to_string())?;
    write_leaf(writer, TOTAL_LINES_TAG, &bucket.total_lines().to_string())?;
    close(writer, VALUE_TAG)?;
    close(writer, ENTRY_TAG)
}

fn write_leaf(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> std::io::Result<()> {
    open(writer, tag)?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    close(writer, tag)
}

fn open(writer: &mut Writer<Vec<u8>>, tag: &str) -> std::io::Result<()> {
    emit(writer, Event::Start(BytesStart::new(tag)))
}

fn close(writer: &mut Writer<Vec<u8>>, tag: &str) -> std::io::Result<()> {
    emit(writer, Event::End(BytesEnd::new(tag)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> std::io::Result<()> {
    writer.write_event(event).map_err(io_error)
}

fn io_error<E>(err: E) -> std::io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    std::io::Error::other(err)
}
