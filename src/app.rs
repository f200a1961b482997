use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use iced::widget::image::Handle;
use iced::{Element, Subscription, Task, Theme};
use tracing::{debug, error, info, warn};

use albumen_catalog::import::{self, ImportResult};
use albumen_catalog::library::Library;
use albumen_core::collection::{self, AlbumCollection};
use albumen_core::layout::{ViewConfig, ViewMode, clamp_spacing};
use albumen_core::models::{Album, AlbumId, Photo, PhotoId};
use albumen_core::orientation::Orientation;
use albumen_core::platform;
use albumen_core::sample;
use albumen_thumbnails::source;

use crate::config::{self, Config};
use crate::images::ImageStore;
use crate::menu::{self, AppMenu};
use crate::notifications::{Notification, NotificationId, Notifications};
use crate::platform::DesktopPlatform;
use crate::views::{self, plural};
use crate::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Albums,
    Album(AlbumId),
    Gallery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTarget {
    Create,
    Edit(AlbumId),
}

/// Title/description form shared by "new album" and "edit album".
#[derive(Debug, Clone)]
pub struct AlbumDialog {
    pub target: DialogTarget,
    pub title: String,
    pub description: String,
}

pub struct App {
    screen: Screen,
    config: Config,
    library: Option<Library>,
    albums: AlbumCollection,

    // Album screen
    album_photos: Vec<Photo>,
    album_view: ViewConfig,

    // Gallery screen
    gallery_photos: Vec<Photo>,
    gallery_view: ViewConfig,

    open_photo: Option<PhotoId>,
    dialog: Option<AlbumDialog>,

    images: ImageStore,
    thumbnail_cache_dir: Option<PathBuf>,

    notifications: Notifications,
    platform: DesktopPlatform,
    _menu: Option<AppMenu>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    ShowAlbums,
    OpenAlbum(AlbumId),
    ShowGallery,

    // Catalog
    CatalogOpened(PathBuf),

    // Album dialog
    NewAlbum,
    EditAlbum,
    DialogTitleChanged(String),
    DialogDescriptionChanged(String),
    SubmitDialog,
    CancelDialog,
    DeleteAlbum(AlbumId),

    // Photos
    AddPhotos,
    FilesSelected(AlbumId, Vec<PathBuf>),
    PhotosPrepared(AlbumId, Vec<Photo>, usize),
    DeletePhoto(PhotoId),
    DeleteAllPhotos,
    PrintAlbum,

    // Detail overlay
    ShowPhoto(PhotoId),
    ClosePhoto,
    PrintPhoto(PhotoId),
    DownloadPhoto(PhotoId),
    DownloadFetched(Box<Photo>, Result<Vec<u8>, String>),

    // View controls
    SetViewMode(ViewMode),
    SpacingChanged(u16),
    SetOrientation(Orientation),
    ToggleDeleteControls,

    // Images
    ThumbnailReady(String, Vec<u8>),
    ThumbnailFailed(String),
    PreviewReady(String, Vec<u8>),

    // Notifications
    DismissNotification(NotificationId),
    Tick,

    Noop,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config = config::load();
        let view = config.view_config();

        let app_menu = match menu::build() {
            Ok(menu) => Some(menu),
            Err(err) => {
                warn!(%err, "native menu unavailable");
                None
            }
        };

        let app = Self {
            screen: Screen::Albums,
            library: None,
            albums: AlbumCollection::default(),
            album_photos: Vec::new(),
            album_view: view,
            gallery_photos: Vec::new(),
            gallery_view: view,
            open_photo: None,
            dialog: None,
            images: ImageStore::default(),
            thumbnail_cache_dir: config::thumbnail_cache_dir(),
            notifications: Notifications::default(),
            platform: DesktopPlatform::new(),
            _menu: app_menu,
            config,
        };

        let catalog_path = app.config.catalog_path();
        let task = Task::perform(async move { catalog_path }, Message::CatalogOpened);

        (app, task)
    }

    pub fn title(&self) -> String {
        match self.screen {
            Screen::Albums => format!("Albumen - {} albums", self.albums.len()),
            Screen::Album(id) => {
                let name = self
                    .albums
                    .get(id)
                    .map(|a| a.title.clone())
                    .unwrap_or_default();
                format!("Albumen - {name}")
            }
            Screen::Gallery => format!(
                "Albumen - {}",
                plural(self.gallery_photos.len(), "photo", "photos")
            ),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![menu::subscription()];
        if !self.notifications.is_empty() {
            subscriptions.push(iced::time::every(Duration::from_millis(500)).map(|_| Message::Tick));
        }
        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogOpened(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).ok();
                }
                let path_str = path.to_string_lossy().to_string();
                match Library::open(&path_str) {
                    Ok(library) => {
                        info!(path = %path_str, "catalog opened");
                        self.albums = match library.load_albums_or_seed() {
                            Ok(albums) => albums,
                            Err(err) => {
                                error!(%err, "failed to seed albums");
                                library.load_albums()
                            }
                        };
                        self.library = Some(library);
                        return self.request_album_covers();
                    }
                    Err(err) => {
                        error!(%err, "failed to open catalog");
                        self.notify(Notification::error(
                            "Catalog unavailable",
                            format!("Changes will not be saved: {err}"),
                        ));
                    }
                }
                Task::none()
            }

            Message::ShowAlbums => {
                self.screen = Screen::Albums;
                self.close_photo();
                self.album_photos.clear();
                self.request_album_covers()
            }

            Message::OpenAlbum(id) => {
                if self.albums.get(id).is_none() {
                    return Task::none();
                }
                self.screen = Screen::Album(id);
                self.close_photo();
                self.album_photos = self
                    .library
                    .as_ref()
                    .map(|library| library.load_photos(id))
                    .unwrap_or_default();
                debug!(%id, photos = self.album_photos.len(), "album opened");
                self.request_thumbnails(self.album_photos.iter().map(|p| p.src.clone()).collect())
            }

            Message::ShowGallery => {
                self.screen = Screen::Gallery;
                self.close_photo();
                let photos = self
                    .library
                    .as_ref()
                    .map(|library| library.all_photos(&self.albums))
                    .unwrap_or_default();
                self.gallery_photos = if photos.is_empty() {
                    sample::sample_photos()
                } else {
                    photos
                };
                self.request_thumbnails(
                    self.gallery_photos.iter().map(|p| p.src.clone()).collect(),
                )
            }

            Message::NewAlbum => {
                self.dialog = Some(AlbumDialog {
                    target: DialogTarget::Create,
                    title: String::new(),
                    description: String::new(),
                });
                Task::none()
            }

            Message::EditAlbum => {
                if let Screen::Album(id) = self.screen
                    && let Some(album) = self.albums.get(id)
                {
                    self.dialog = Some(AlbumDialog {
                        target: DialogTarget::Edit(id),
                        title: album.title.clone(),
                        description: album.description.clone(),
                    });
                }
                Task::none()
            }

            Message::DialogTitleChanged(title) => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.title = title;
                }
                Task::none()
            }

            Message::DialogDescriptionChanged(description) => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.description = description;
                }
                Task::none()
            }

            Message::SubmitDialog => {
                self.submit_dialog();
                Task::none()
            }

            Message::CancelDialog => {
                self.dialog = None;
                Task::none()
            }

            Message::DeleteAlbum(id) => {
                let result = match &self.library {
                    Some(library) => library.delete_album(&mut self.albums, id),
                    None => Ok(self.albums.remove(id)),
                };
                let removed = match result {
                    Ok(removed) => removed,
                    Err(err) => {
                        error!(%err, %id, "failed to delete album");
                        self.notify(Notification::error(
                            "Album not deleted",
                            format!("The album could not be removed: {err}"),
                        ));
                        return Task::none();
                    }
                };
                if let Some(album) = removed {
                    self.notify(Notification::success(
                        "Album deleted",
                        format!("\"{}\" was removed", album.title),
                    ));
                }
                if self.screen == Screen::Album(id) {
                    self.screen = Screen::Albums;
                }
                Task::none()
            }

            Message::AddPhotos => {
                let Screen::Album(album_id) = self.screen else {
                    debug!("add photos ignored outside an album");
                    return Task::none();
                };
                Task::perform(
                    async move {
                        let handles = rfd::AsyncFileDialog::new()
                            .set_title("Add photos")
                            .add_filter(
                                "Images",
                                &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"],
                            )
                            .pick_files()
                            .await;
                        handles
                            .unwrap_or_default()
                            .into_iter()
                            .map(|h| h.path().to_path_buf())
                            .collect::<Vec<_>>()
                    },
                    move |paths| Message::FilesSelected(album_id, paths),
                )
            }

            Message::FilesSelected(_, paths) if paths.is_empty() => Task::none(),

            Message::FilesSelected(album_id, paths) => {
                info!(%album_id, files = paths.len(), "adding photos");
                Task::perform(
                    import::prepare_photos(Some(album_id), paths),
                    move |ImportResult { photos, skipped }| {
                        Message::PhotosPrepared(album_id, photos, skipped)
                    },
                )
            }

            Message::PhotosPrepared(album_id, photos, skipped) => {
                if photos.is_empty() {
                    if skipped > 0 {
                        self.notify(Notification::error(
                            "No photos added",
                            format!("{} skipped: not an image", plural(skipped, "file", "files")),
                        ));
                    }
                    return Task::none();
                }
                let srcs: Vec<String> = photos.iter().map(|p| p.src.clone()).collect();
                let Some(added) = self.append_to_album(album_id, photos) else {
                    return Task::none();
                };
                self.notify(Notification::success(
                    "Photos added",
                    format!("Added {} to the album", plural(added, "photo", "photos")),
                ));
                self.request_thumbnails(srcs)
            }

            Message::DeletePhoto(id) => {
                self.delete_photo(id);
                Task::none()
            }

            Message::DeleteAllPhotos => {
                let Screen::Album(album_id) = self.screen else {
                    return Task::none();
                };
                let cleared: Vec<String> = self.album_photos.iter().map(|p| p.src.clone()).collect();
                let removed = collection::clear_photos(&mut self.album_photos);
                if removed == 0 {
                    return Task::none();
                }
                self.close_photo();
                self.persist_album_photos(album_id);
                for src in &cleared {
                    self.release_image(src);
                }
                self.notify(Notification::success(
                    "All photos deleted",
                    format!("Removed {} from the album", plural(removed, "photo", "photos")),
                ));
                Task::none()
            }

            Message::PrintAlbum => {
                let Screen::Album(album_id) = self.screen else {
                    return Task::none();
                };
                let title = self
                    .albums
                    .get(album_id)
                    .map(|a| a.title.clone())
                    .unwrap_or_default();
                match platform::print_album(
                    &self.platform,
                    &title,
                    &self.album_photos,
                    self.album_view.orientation,
                ) {
                    Ok(()) => self.notify(Notification::info(
                        "Preparing to print",
                        "The album opens in your browser for printing",
                    )),
                    Err(err) => self.notify(Notification::error("Cannot print", err.to_string())),
                }
                Task::none()
            }

            Message::ShowPhoto(id) => {
                let Some(photo) = self.find_photo(id) else {
                    return Task::none();
                };
                let src = photo.src.clone();
                self.open_photo = Some(id);
                if self.images.has_preview(&src) {
                    return Task::none();
                }
                self.images.clear_preview();
                Task::perform(
                    async move {
                        let bytes = source::fetch(&src).await;
                        (src, bytes)
                    },
                    |(src, result)| match result {
                        Ok(bytes) => Message::PreviewReady(src, bytes),
                        Err(err) => {
                            warn!(%src, %err, "failed to load full image");
                            Message::Noop
                        }
                    },
                )
            }

            Message::ClosePhoto => {
                self.close_photo();
                Task::none()
            }

            Message::PrintPhoto(id) => {
                if let Some(photo) = self.find_photo(id)
                    && let Err(err) = platform::print_photo(&self.platform, photo)
                {
                    error!(%err, "failed to print photo");
                    self.notify(Notification::error("Cannot print", err.to_string()));
                }
                Task::none()
            }

            Message::DownloadPhoto(id) => {
                let Some(photo) = self.find_photo(id).cloned() else {
                    return Task::none();
                };
                Task::perform(
                    async move {
                        let bytes = source::fetch(&photo.src)
                            .await
                            .map_err(|err| err.to_string());
                        (photo, bytes)
                    },
                    |(photo, bytes)| Message::DownloadFetched(Box::new(photo), bytes),
                )
            }

            Message::DownloadFetched(photo, result) => {
                let saved = result.and_then(|bytes| {
                    platform::download_photo(&self.platform, &photo, &bytes)
                        .map_err(|err| err.to_string())
                });
                match saved {
                    Ok(path) => self.notify(Notification::success(
                        "Photo downloaded",
                        format!("Saved to {}", path.display()),
                    )),
                    Err(err) => {
                        error!(%err, "download failed");
                        self.notify(Notification::error("Download failed", err));
                    }
                }
                Task::none()
            }

            Message::SetViewMode(mode) => {
                if let Some(view) = self.current_view_mut() {
                    view.mode = mode;
                }
                Task::none()
            }

            Message::SpacingChanged(spacing) => {
                if let Some(view) = self.current_view_mut() {
                    view.spacing = clamp_spacing(spacing);
                }
                Task::none()
            }

            Message::SetOrientation(orientation) => {
                if let Some(view) = self.current_view_mut() {
                    view.orientation = orientation;
                }
                Task::none()
            }

            Message::ToggleDeleteControls => {
                if let Some(view) = self.current_view_mut() {
                    view.show_delete = !view.show_delete;
                }
                Task::none()
            }

            Message::ThumbnailReady(src, bytes) => {
                self.images.thumbnail_loaded(src, bytes);
                Task::none()
            }

            Message::ThumbnailFailed(src) => {
                self.images.thumbnail_failed(&src);
                Task::none()
            }

            Message::PreviewReady(src, bytes) => {
                let open_src = self
                    .open_photo
                    .and_then(|id| self.find_photo(id))
                    .map(|photo| photo.src.clone());
                if !self.images.preview_loaded(src, bytes, open_src.as_deref()) {
                    debug!("discarded preview for a photo that is no longer open");
                }
                Task::none()
            }

            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }

            Message::Tick => {
                self.notifications.tick();
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen = match self.screen {
            Screen::Albums => views::albums::view(self),
            Screen::Album(_) => views::album::view(self),
            Screen::Gallery => views::gallery::view(self),
        };

        let screen = if let Some(dialog) = &self.dialog {
            widgets::modal::modal(
                screen,
                widgets::album_dialog::view(dialog),
                Message::CancelDialog,
            )
        } else if let Some(photo) = self.open_photo.and_then(|id| self.find_photo(id)) {
            let image = self.images.best_for(&photo.src);
            let can_delete = self.current_view().is_some_and(|v| v.show_delete);
            widgets::modal::modal(
                screen,
                widgets::photo_modal::view(photo, image, can_delete),
                Message::ClosePhoto,
            )
        } else {
            screen
        };

        widgets::toasts::overlay(screen, &self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn submit_dialog(&mut self) {
        let Some(dialog) = self.dialog.clone() else {
            return;
        };
        let result = match dialog.target {
            DialogTarget::Create => self
                .albums
                .create(&dialog.title, &dialog.description)
                .map(|album| album.title.clone()),
            DialogTarget::Edit(id) => self
                .albums
                .update(id, &dialog.title, &dialog.description)
                .map(|album| album.title.clone()),
        };

        match result {
            Ok(title) => {
                self.dialog = None;
                self.persist_albums();
                let heading = match dialog.target {
                    DialogTarget::Create => "Album created",
                    DialogTarget::Edit(_) => "Album updated",
                };
                self.notify(Notification::success(heading, format!("\"{title}\" saved")));
            }
            Err(err) => {
                self.notify(Notification::error("Error", err.to_string()));
            }
        }
    }

    /// Append a prepared batch to its album. `None` when the album was
    /// deleted while the batch was being prepared; the batch is dropped.
    fn append_to_album(&mut self, album_id: AlbumId, photos: Vec<Photo>) -> Option<usize> {
        if self.albums.get(album_id).is_none() {
            warn!(%album_id, dropped = photos.len(), "album deleted before its photos were added");
            self.notify(Notification::error(
                "Photos not added",
                "The album was deleted before the upload finished",
            ));
            return None;
        }

        if self.screen == Screen::Album(album_id) {
            let added = collection::append_photos(&mut self.album_photos, photos);
            self.persist_album_photos(album_id);
            return Some(added);
        }

        // The user navigated away while the batch was being prepared; append
        // to the stored list instead.
        let Some(library) = &self.library else {
            return Some(0);
        };
        let result = library.append_photos(&mut self.albums, album_id, photos);
        match result {
            Ok(added) => Some(added),
            Err(err) => {
                error!(%err, %album_id, "failed to save photos");
                self.notify(Notification::error("Photos not added", err.to_string()));
                None
            }
        }
    }

    fn delete_photo(&mut self, id: PhotoId) {
        let removed = match self.screen {
            Screen::Album(album_id) => {
                let removed = collection::remove_photo(&mut self.album_photos, id);
                if removed.is_some() {
                    self.persist_album_photos(album_id);
                }
                removed
            }
            Screen::Gallery => {
                let removed = collection::remove_photo(&mut self.gallery_photos, id);
                if let Some(album_id) = removed.as_ref().and_then(|p| p.album_id) {
                    self.remove_from_stored_album(album_id, id);
                }
                removed
            }
            Screen::Albums => None,
        };

        if let Some(photo) = removed {
            if self.open_photo == Some(id) {
                self.close_photo();
            }
            self.release_image(&photo.src);
            self.notify(Notification::success(
                "Photo deleted",
                "The photo was removed",
            ));
        }
    }

    fn remove_from_stored_album(&mut self, album_id: AlbumId, id: PhotoId) {
        let Some(library) = &self.library else {
            return;
        };
        let mut stored = library.load_photos(album_id);
        if collection::remove_photo(&mut stored, id).is_some()
            && let Err(err) = library.save_photos(&mut self.albums, album_id, &stored)
        {
            error!(%err, %album_id, "failed to save photos");
        }
    }

    fn persist_album_photos(&mut self, album_id: AlbumId) {
        match &self.library {
            Some(library) => {
                if let Err(err) = library.save_photos(&mut self.albums, album_id, &self.album_photos)
                {
                    error!(%err, %album_id, "failed to save photos");
                }
            }
            None => {
                let _ = self.albums.sync_photos(album_id, &self.album_photos);
            }
        }
    }

    fn close_photo(&mut self) {
        self.open_photo = None;
        self.images.clear_preview();
    }

    /// Drop the handles for a removed photo's source unless another photo or
    /// an album cover still shows it.
    fn release_image(&mut self, src: &str) {
        let still_shown = self.current_photos().iter().any(|p| p.src == src)
            || self.albums.as_slice().iter().any(|a| a.thumbnail_src == src);
        if !still_shown {
            self.images.forget(src);
        }
    }

    fn persist_albums(&self) {
        if let Some(library) = &self.library
            && let Err(err) = library.save_albums(&self.albums)
        {
            error!(%err, "failed to save albums");
        }
    }

    fn request_album_covers(&mut self) -> Task<Message> {
        let covers = self
            .albums
            .as_slice()
            .iter()
            .filter(|a| !a.thumbnail_src.is_empty())
            .map(|a| a.thumbnail_src.clone())
            .collect();
        self.request_thumbnails(covers)
    }

    fn request_thumbnails(&mut self, srcs: Vec<String>) -> Task<Message> {
        let cache_dir = self.thumbnail_cache_dir.clone();
        let tasks: Vec<_> = srcs
            .into_iter()
            .filter(|src| self.images.begin_thumbnail(src))
            .map(|src| {
                let cache_dir = cache_dir.clone();
                Task::perform(
                    async move {
                        let result = source::load_thumbnail(&src, cache_dir.as_deref()).await;
                        (src, result)
                    },
                    |(src, result)| match result {
                        Ok(bytes) => Message::ThumbnailReady(src, bytes),
                        Err(err) => {
                            warn!(%src, %err, "failed to load thumbnail");
                            Message::ThumbnailFailed(src)
                        }
                    },
                )
            })
            .collect();
        Task::batch(tasks)
    }

    fn find_photo(&self, id: PhotoId) -> Option<&Photo> {
        self.current_photos().iter().find(|p| p.id == id)
    }

    fn current_view(&self) -> Option<&ViewConfig> {
        match self.screen {
            Screen::Album(_) => Some(&self.album_view),
            Screen::Gallery => Some(&self.gallery_view),
            Screen::Albums => None,
        }
    }

    fn current_view_mut(&mut self) -> Option<&mut ViewConfig> {
        match self.screen {
            Screen::Album(_) => Some(&mut self.album_view),
            Screen::Gallery => Some(&mut self.gallery_view),
            Screen::Albums => None,
        }
    }

    pub fn current_photos(&self) -> &[Photo] {
        match self.screen {
            Screen::Album(_) => &self.album_photos,
            Screen::Gallery => &self.gallery_photos,
            Screen::Albums => &[],
        }
    }

    pub fn current_album(&self) -> Option<&Album> {
        match self.screen {
            Screen::Album(id) => self.albums.get(id),
            _ => None,
        }
    }

    pub fn albums(&self) -> &[Album] {
        self.albums.as_slice()
    }

    pub fn album_view(&self) -> &ViewConfig {
        &self.album_view
    }

    pub fn gallery_view(&self) -> &ViewConfig {
        &self.gallery_view
    }

    pub fn thumbnails(&self) -> &HashMap<String, Handle> {
        self.images.thumbnails()
    }
}
