//! XML serialization of backup documents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::document::{BACKUP_TYPE, BackupDocument};

/// Serialize `document` to `path` as pretty-printed XML with a two-space
/// indent. The `count` attribute is taken from the messages actually in
/// the document. Attribute values are escaped by the writer.
pub fn write_backup(document: &BackupDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .context("writing xml declaration")?;

    let count = document.count().to_string();
    let backup_date = document.backup_date.to_string();
    let mut root = BytesStart::new("smses");
    root.push_attribute(("count", count.as_str()));
    root.push_attribute(("backup_set", document.backup_set.as_str()));
    root.push_attribute(("backup_date", backup_date.as_str()));
    root.push_attribute(("type", BACKUP_TYPE));
    writer
        .write_event(Event::Start(root))
        .context("writing root element")?;

    for message in &document.messages {
        let date = message.timestamp_millis.to_string();
        let mut sms = BytesStart::new("sms");
        sms.push_attribute(("protocol", "0"));
        sms.push_attribute(("address", message.address()));
        sms.push_attribute(("date", date.as_str()));
        sms.push_attribute(("type", message.direction.code()));
        sms.push_attribute(("subject", "null"));
        sms.push_attribute(("body", message.body.as_str()));
        sms.push_attribute(("toa", "null"));
        sms.push_attribute(("sc_toa", "null"));
        sms.push_attribute(("service_center", "null"));
        sms.push_attribute(("read", "1"));
        sms.push_attribute(("status", "-1"));
        sms.push_attribute(("locked", "0"));
        sms.push_attribute(("date_sent", date.as_str()));
        sms.push_attribute(("sub_id", "-1"));
        sms.push_attribute(("readable_date", message.readable_date.as_str()));
        sms.push_attribute(("contact_name", message.contact_name()));
        writer
            .write_event(Event::Empty(sms))
            .context("writing sms element")?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("smses")))
        .context("writing closing element")?;

    let mut inner = writer.into_inner();
    inner.write_all(b"\n").context("finishing document")?;
    inner
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
