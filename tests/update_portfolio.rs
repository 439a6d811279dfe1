use artfolio::{
    list_artists, list_folders, load_document, update_artist_portfolio, PortfolioError, Settings,
};
use serde_json::Value;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "gallery": "Oro & Aquae",
  "artists": [
    {
      "id": "susan-g-scott",
      "name": "Susan",
      "bio": "Peintre à Montréal",
      "artworks": []
    },
    {
      "id": "li-wei",
      "name": "Li Wei",
      "thumbnailImage": "Li Wei/cover.jpg",
      "artworks": [
        {
          "title": "Cover",
          "year": "2010",
          "medium": "Collage",
          "dimensions": "Variable",
          "image": "Li Wei/cover.jpg"
        }
      ]
    }
  ]
}"#;

struct Site {
    dir: TempDir,
    settings: Settings,
}

impl Site {
    fn new(folders: &[(&str, &[&str])]) -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/artists.json"), DOCUMENT).unwrap();

        for (folder, files) in folders {
            let folder_path = dir.path().join(folder);
            fs::create_dir(&folder_path).unwrap();
            for file in *files {
                File::create(folder_path.join(file)).unwrap();
            }
        }

        let settings = Settings::for_site_root(dir.path());
        Site { dir, settings }
    }

    fn document_path(&self) -> std::path::PathBuf {
        self.dir.path().join("data/artists.json")
    }

    fn document_text(&self) -> String {
        fs::read_to_string(self.document_path()).unwrap()
    }

    fn document_json(&self) -> Value {
        serde_json::from_str(&self.document_text()).unwrap()
    }
}

fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| {
            (
                e.path().display().to_string(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_update_scenario_susan_g_scott() {
    let site = Site::new(&[(
        "Susan G. Scott",
        &["Sunset_2019_Watercolor.jpg", "Dawn_2021_Sculpture.png", "notes.txt"],
    )]);

    update_artist_portfolio(&site.settings, "Susan G. Scott", "susan-g-scott", false).unwrap();

    let json = site.document_json();
    let susan = &json["artists"][0];
    assert_eq!(
        susan["thumbnailImage"],
        "Susan G. Scott/Dawn_2021_Sculpture.png"
    );

    let artworks = susan["artworks"].as_array().unwrap();
    assert_eq!(artworks.len(), 2);

    assert_eq!(artworks[0]["title"], "Dawn");
    assert_eq!(artworks[0]["year"], "2021");
    assert_eq!(artworks[0]["medium"], "Sculpture");
    assert_eq!(artworks[0]["dimensions"], "Variable");
    assert_eq!(artworks[0]["image"], "Susan G. Scott/Dawn_2021_Sculpture.png");

    assert_eq!(artworks[1]["title"], "Sunset");
    assert_eq!(artworks[1]["year"], "2019");
    assert_eq!(artworks[1]["medium"], "Watercolor");
    assert_eq!(artworks[1]["image"], "Susan G. Scott/Sunset_2019_Watercolor.jpg");
}

#[test]
fn test_update_round_trip_single_artwork() {
    let site = Site::new(&[("Folder", &["A_2020_Oil on Canvas_24x36.jpg"])]);

    update_artist_portfolio(&site.settings, "Folder", "li-wei", false).unwrap();

    let document = load_document(&site.document_path()).unwrap();
    let li = document
        .artist_summaries()
        .into_iter()
        .find(|artist| artist.id == "li-wei")
        .unwrap();
    assert_eq!(li.artwork_count, 1);

    let json = site.document_json();
    let artwork = &json["artists"][1]["artworks"][0];
    assert_eq!(artwork["title"], "A");
    assert_eq!(artwork["year"], "2020");
    assert_eq!(artwork["medium"], "Oil on Canvas");
    assert_eq!(artwork["dimensions"], "24 x 36 inches");
    assert_eq!(artwork["image"], "Folder/A_2020_Oil on Canvas_24x36.jpg");
}

#[test]
fn test_update_replaces_previous_artworks_and_keeps_other_fields() {
    let site = Site::new(&[("Li Wei", &["Koi_2015_Watercolor and ink on silk.png"])]);

    update_artist_portfolio(&site.settings, "Li Wei", "li-wei", false).unwrap();

    let json = site.document_json();
    assert_eq!(json["gallery"], "Oro & Aquae");
    assert_eq!(json["artists"][0]["bio"], "Peintre à Montréal");
    assert_eq!(json["artists"][0]["artworks"], Value::Array(vec![]));

    let li = &json["artists"][1];
    assert_eq!(li["thumbnailImage"], "Li Wei/Koi_2015_Watercolor and ink on silk.png");
    let artworks = li["artworks"].as_array().unwrap();
    assert_eq!(artworks.len(), 1);
    assert_eq!(artworks[0]["title"], "Koi");
    assert_eq!(artworks[0]["medium"], "Watercolor and ink on silk");

    let text = site.document_text();
    assert!(text.contains("Peintre à Montréal"));
    assert!(text.starts_with("{\n  \"gallery\""));
}

#[test]
fn test_update_is_idempotent() {
    let site = Site::new(&[(
        "Susan G. Scott",
        &["Sunset_2019_Watercolor.jpg", "Dawn_2021_Sculpture.png"],
    )]);

    update_artist_portfolio(&site.settings, "Susan G. Scott", "susan-g-scott", false).unwrap();
    let first = site.document_text();

    update_artist_portfolio(&site.settings, "Susan G. Scott", "susan-g-scott", false).unwrap();
    let second = site.document_text();

    assert_eq!(first, second);
}

#[test]
fn test_failed_updates_leave_document_untouched() {
    let site = Site::new(&[("Susan G. Scott", &["Dawn_2021_Sculpture.png"])]);
    fs::write(site.dir.path().join("readme.jpg"), "not a folder").unwrap();

    let err = update_artist_portfolio(&site.settings, "Susan G. Scott", "nobody", false).unwrap_err();
    assert!(matches!(err, PortfolioError::ArtistNotFound(_)));

    let err = update_artist_portfolio(&site.settings, "Missing", "susan-g-scott", false).unwrap_err();
    assert!(matches!(err, PortfolioError::FolderNotFound(_)));

    let err = update_artist_portfolio(&site.settings, "readme.jpg", "susan-g-scott", false).unwrap_err();
    assert!(matches!(err, PortfolioError::NotADirectory(_)));

    assert_eq!(site.document_text(), DOCUMENT);
}

#[test]
fn test_invalid_document_aborts_update() {
    let site = Site::new(&[("Susan G. Scott", &["Dawn_2021_Sculpture.png"])]);
    fs::write(site.document_path(), "{ \"artists\": [").unwrap();

    let err = update_artist_portfolio(&site.settings, "Susan G. Scott", "susan-g-scott", false).unwrap_err();

    assert!(err.is_document_error());
    assert_eq!(site.document_text(), "{ \"artists\": [");
}

#[test]
fn test_listing_operations_do_not_mutate() {
    let site = Site::new(&[
        ("Susan G. Scott", &["Dawn_2021_Sculpture.png", "Sunset_2019_Watercolor.jpg"]),
        ("Li Wei", &["cover.jpg"]),
        ("css", &["bg.png"]),
    ]);
    let before = snapshot(site.dir.path());

    let artists = list_artists(&site.settings).unwrap();
    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].id, "susan-g-scott");
    assert_eq!(artists[0].artwork_count, 0);
    assert_eq!(artists[1].artwork_count, 1);

    let folders = list_folders(&site.settings).unwrap();
    let names: Vec<&str> = folders.iter().map(|f| f.folder.name.as_str()).collect();
    assert_eq!(names, vec!["Li Wei", "Susan G. Scott"]);
    assert_eq!(folders[1].folder.image_count, 2);
    assert_eq!(folders[1].linked, Some(true));

    assert_eq!(snapshot(site.dir.path()), before);
}

#[test]
fn test_document_path_override() {
    let site = Site::new(&[("Li Wei", &["cover.jpg"])]);
    fs::create_dir(site.dir.path().join("content")).unwrap();
    fs::rename(site.document_path(), site.dir.path().join("content/portfolio.json")).unwrap();

    let mut settings = site.settings.clone();
    settings.document_path = "content/portfolio.json".into();

    let summary = update_artist_portfolio(&settings, "Li Wei", "li-wei", false).unwrap();

    assert_eq!(summary.artworks.len(), 1);
    assert_eq!(summary.artworks[0].title, "cover");
    assert!(!site.document_path().exists());
}
