use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::Path;

use crate::config::PlatformConfig;
use crate::platform::build_full_mesh;

/// Generate the platform XML document and write it to `output_file`.
///
/// Validates the configuration, builds the full-mesh topology, serializes
/// it, and writes the result in one shot. The document is a pure function
/// of the configuration.
pub fn generate_platform_xml(config: &PlatformConfig, output_file: &Path) -> Result<()> {
    config.validate()?;

    let platform = build_full_mesh(config);
    let document = platform.to_document();

    fs::write(output_file, &document).wrap_err_with(|| {
        format!(
            "Failed to write platform file '{}'",
            output_file.display()
        )
    })?;

    info!(
        "Generated platform with {} hosts, {} links, {} routes ({} bytes)",
        platform.zone.hosts.len(),
        platform.zone.links.len(),
        platform.zone.routes.len(),
        document.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn config(num_nodes: u32) -> PlatformConfig {
        PlatformConfig::new(num_nodes, 64)
    }

    #[test]
    fn test_generate_writes_document() {
        let output = NamedTempFile::new().expect("temp file");
        let result = generate_platform_xml(&config(2), output.path());
        assert!(result.is_ok());

        let content = fs::read_to_string(output.path()).expect("read back");
        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(content.contains("<platform version=\"4.1\">"));
        assert!(content.contains("<zone id=\"zone0\" routing=\"Full\">"));
        assert!(content.contains("<host id=\"Node-1\" speed=\"2445Mf\"/>"));
        assert!(content.contains("<host id=\"Node-2\" speed=\"2445Mf\"/>"));
        assert!(content.contains(
            "<link id=\"loopback\" bandwidth=\"200GBps\" latency=\"1us\" sharing_policy=\"FATPIPE\"/>"
        ));
        assert!(content.contains("<route src=\"Node-1\" dst=\"Node-2\">"));
        assert!(content.contains("<link_ctn id=\"1\"/>"));
        assert!(content.ends_with("</platform>\n"));
    }

    #[test]
    fn test_generate_counts_in_document() {
        let cfg = config(3);
        let output = NamedTempFile::new().expect("temp file");
        generate_platform_xml(&cfg, output.path()).expect("generate");

        let content = fs::read_to_string(output.path()).expect("read back");
        let hosts = content.matches("<host ").count();
        let links = content.matches("<link ").count();
        let routes = content.matches("<route ").count();
        assert_eq!(hosts as u64, cfg.host_count());
        assert_eq!(links as u64, cfg.link_count());
        assert_eq!(routes as u64, cfg.route_count());
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let first = NamedTempFile::new().expect("temp file");
        let second = NamedTempFile::new().expect("temp file");
        generate_platform_xml(&config(4), first.path()).expect("first run");
        generate_platform_xml(&config(4), second.path()).expect("second run");

        let a = fs::read(first.path()).expect("read first");
        let b = fs::read(second.path()).expect("read second");
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_writing() {
        let output = NamedTempFile::new().expect("temp file");
        let mut cfg = config(2);
        cfg.bandwidth = "fast".to_string();
        assert!(generate_platform_xml(&cfg, output.path()).is_err());

        let content = fs::read_to_string(output.path()).expect("read back");
        assert!(content.is_empty());
    }

    #[test]
    fn test_unwritable_path_reports_context() {
        let err = generate_platform_xml(&config(2), Path::new("/nonexistent-dir/platform.xml"))
            .expect_err("write must fail");
        assert!(err.to_string().contains("/nonexistent-dir/platform.xml"));
    }
}
