//! Version sources.
//!
//! - [`local`] reads the installed version (XML file or registry value)
//! - [`remote`] scrapes the published version from a vendor page
//! - [`fetch`] and [`html`] are the HTTP and markup helpers behind it

pub mod fetch;
pub mod html;
pub mod local;
pub mod registry;
pub mod remote;

pub use fetch::{describe_failure, HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use html::{find_element_text, strip_trailer};
pub use local::{parse_xml_version, read_xml_version, resolve_local, LocalVersion};
pub use registry::read_registry_value;
pub use remote::{parse_remote_version, resolve_remote, RemoteError, RemoteVersion};
