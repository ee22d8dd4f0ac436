pub mod xml;

pub use xml::{XmlReportWriter, render_xml};
