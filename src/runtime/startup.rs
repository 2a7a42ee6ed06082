use tracing::info;

use crate::app::{Controller, Notice, View};
use crate::audio::AudioEngine;
use crate::config;
use crate::library::resolve_selection;

/// Apply the volume default and queue up any paths given on the command line.
pub fn apply_startup<E: AudioEngine>(
    controller: &mut Controller<E>,
    view: &mut View,
    settings: &config::Settings,
    args: &[String],
) {
    controller.set_volume(view.volume);

    if args.is_empty() {
        return;
    }

    let paths: Vec<_> = args
        .iter()
        .flat_map(|arg| resolve_selection(arg, &settings.library))
        .collect();

    match controller.add_tracks(paths) {
        Ok(added) => {
            info!(added, "songs added from command line");
            view.notify(Notice::success(format!("{added} song(s) added to playlist.")));
        }
        Err(err) => view.notify(Notice::from(&err)),
    }
}
