//! Shop contact details.

use anyhow::Result;
use lapki_commerce::contacts::Contacts;

use crate::context::Context;

/// Run the contacts command.
pub fn run(ctx: &Context) -> Result<()> {
    let session = ctx.open_store();
    let contacts = session.store.contacts();

    if ctx.output.is_json() {
        ctx.output.json(contacts);
        return Ok(());
    }

    print_contacts(ctx, contacts);
    Ok(())
}

pub(crate) fn print_contacts(ctx: &Context, contacts: &Contacts) {
    ctx.output.header("Контакты");
    for channel in contacts.channels() {
        ctx.output.kv(channel.kind.title(), &channel.value);
        ctx.output.kv("    ", &channel.note);
    }
}
