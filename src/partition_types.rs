//! Well-known partition type GUIDs.
//!
//! Consulted only when symbol resolution is enabled.

use uuid::Uuid;

/// Operating system a partition type belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperatingSystem {
    /// Not tied to an operating system.
    None,
    /// Ceph storage.
    Ceph,
    /// ChromeOS.
    ChromeOs,
    /// FreeBSD.
    FreeBsd,
    /// Haiku.
    Haiku,
    /// HP-UX.
    HpUx,
    /// Linux.
    Linux,
    /// macOS / Darwin.
    MacOs,
    /// NetBSD.
    NetBsd,
    /// Open Network Install Environment.
    Onie,
    /// OpenBSD.
    OpenBsd,
    /// Plan 9.
    Plan9,
    /// PowerPC reference platform.
    PowerPc,
    /// QNX.
    Qnx,
    /// Solaris / illumos.
    Solaris,
    /// VMware ESX.
    VmWare,
    /// Microsoft Windows.
    Windows,
}

/// A well-known partition type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Type {
    /// Type GUID, in canonical (not on-disk) form.
    pub guid: Uuid,
    /// Owning operating system.
    pub os: OperatingSystem,
    /// Human-readable label.
    pub desc: &'static str,
}

impl Type {
    /// Find the well-known type with this GUID.
    pub fn from_guid(guid: &Uuid) -> Option<Type> {
        ALL.iter().find(|t| t.guid == *guid).copied()
    }
}

partition_types! {
    /// Unused entry
    (UNUSED, "00000000-0000-0000-0000-000000000000", OperatingSystem::None, "Unused Entry"),
    /// MBR partition scheme
    (MBR, "024DEE41-33E7-11D3-9D69-0008C781F39F", OperatingSystem::None, "MBR Partition Scheme"),
    /// EFI system partition
    (EFI, "C12A7328-F81F-11D2-BA4B-00A0C93EC93B", OperatingSystem::None, "EFI System Partition"),
    /// BIOS boot partition
    (BIOS, "21686148-6449-6E6F-744E-656564454649", OperatingSystem::None, "BIOS Boot Partition"),
    /// Intel Fast Flash (iFFS) partition
    (FLASH, "D3BFE2DE-3DAF-11DF-BA40-E3A556D89593", OperatingSystem::None, "Intel Fast Flash (iFFS) Partition"),
    /// Sony boot partition
    (SONY_BOOT, "F4019732-066E-4E12-8273-346C5641494F", OperatingSystem::None, "Sony Boot Partition"),
    /// Lenovo boot partition
    (LENOVO_BOOT, "BFBFAFE7-A34F-448A-9A5B-6213EB736C22", OperatingSystem::None, "Lenovo Boot Partition"),

    /// Microsoft reserved partition
    (MICROSOFT_RESERVED, "E3C9E316-0B5C-4DB8-817D-F92DF00215AE", OperatingSystem::Windows, "Microsoft Reserved Partition"),
    /// Basic data partition
    (BASIC, "EBD0A0A2-B9E5-4433-87C0-68B6B72699C7", OperatingSystem::Windows, "Basic Data Partition"),
    /// Logical disk manager metadata partition
    (WINDOWS_METADATA, "5808C8AA-7E8F-42E0-85D2-E1E90434CFB3", OperatingSystem::Windows, "Logical Disk Manager Metadata Partition"),
    /// Logical disk manager data partition
    (WINDOWS_DATA, "AF9B60A0-1431-4F62-BC68-3311714A69AD", OperatingSystem::Windows, "Logical Disk Manager Data Partition"),
    /// Windows recovery environment
    (WINDOWS_RECOVERY, "DE94BBA4-06D1-4D40-A16A-BFD50179D6AC", OperatingSystem::Windows, "Windows Recovery Environment"),
    /// IBM general parallel file system partition
    (WINDOWS_IBM_GPFS, "37AFFC90-EF7D-4E96-91C3-2D7AE055B174", OperatingSystem::Windows, "IBM General Parallel File System Partition"),
    /// Storage spaces partition
    (WINDOWS_STORAGE_SPACES, "E75CAF8F-F680-4CEE-AFA3-B001E56EFC2D", OperatingSystem::Windows, "Storage Spaces Partition"),

    /// HP-UX data partition
    (HPUX_DATA, "75894C1E-3AEB-11D3-B7C1-7B03A0000000", OperatingSystem::HpUx, "HP-UX Data Partition"),
    /// HP-UX service partition
    (HPUX_SERVICE, "E2A1E728-32E3-11D6-A682-7B03A0000000", OperatingSystem::HpUx, "HP-UX Service Partition"),

    /// Linux filesystem data
    (LINUX_FS, "0FC63DAF-8483-4772-8E79-3D69D8477DE4", OperatingSystem::Linux, "Linux Filesystem Data"),
    /// Linux RAID partition
    (LINUX_RAID, "A19D880F-05FC-4D3B-A006-743F0F84911E", OperatingSystem::Linux, "Linux RAID Partition"),
    /// Linux root partition (x86)
    (LINUX_ROOT_X86, "44479540-F297-41B2-9AF7-D131D5F0458A", OperatingSystem::Linux, "Linux Root Partition (x86)"),
    /// Linux root partition (x86-64)
    (LINUX_ROOT_X86_64, "4F68BCE3-E8CD-4DB1-96E7-FBCAF984B709", OperatingSystem::Linux, "Linux Root Partition (x86-64)"),
    /// Linux root partition (32-bit ARM)
    (LINUX_ROOT_ARM_32, "69DAD710-2CE4-4E3C-B16C-21A1D49ABED3", OperatingSystem::Linux, "Linux Root Partition (32-bit ARM)"),
    /// Linux root partition (64-bit ARM)
    (LINUX_ROOT_ARM_64, "B921B045-1DF0-41C3-AF44-4C6F280D3FAE", OperatingSystem::Linux, "Linux Root Partition (64-bit ARM)"),
    /// Linux /usr partition (x86-64)
    (LINUX_USR_X86_64, "8484680C-9521-48C6-9C11-B0720656F69E", OperatingSystem::Linux, "Linux /usr Partition (x86-64)"),
    /// Linux swap partition
    (LINUX_SWAP, "0657FD6D-A4AB-43C4-84E5-0933C84B4F4F", OperatingSystem::Linux, "Linux Swap Partition"),
    /// Linux logical volume manager partition
    (LINUX_LVM, "E6D6D379-F507-44C2-A23C-238F2A3DF928", OperatingSystem::Linux, "Linux Logical Volume Manager Partition"),
    /// Linux /home partition
    (LINUX_HOME, "933AC7E1-2EB4-4F13-B844-0E14E2AEF915", OperatingSystem::Linux, "Linux /home Partition"),
    /// Linux /srv partition
    (LINUX_SRV, "3B8F8425-20E0-4F3B-907F-1A25A76F98E8", OperatingSystem::Linux, "Linux /srv Partition"),
    /// Linux /var partition
    (LINUX_VAR, "4D21B016-B534-45C2-A9FB-5C16E091FD2D", OperatingSystem::Linux, "Linux /var Partition"),
    /// Linux /var/tmp partition
    (LINUX_TMP, "7EC6F557-3BC5-4ACA-B293-16EF5DF639D1", OperatingSystem::Linux, "Linux /var/tmp Partition"),
    /// Plain dm-crypt partition
    (LINUX_DMCRYPT, "7FFEC5C9-2D00-49B7-8941-3EA10A5586B7", OperatingSystem::Linux, "Linux Plain dm-crypt Partition"),
    /// LUKS partition
    (LINUX_LUKS, "CA7D7CCB-63ED-4C53-861C-1742536059CC", OperatingSystem::Linux, "Linux LUKS Partition"),
    /// Extended boot loader partition
    (LINUX_XBOOTLDR, "BC13C2FF-59E6-4262-A352-B275FD6F7172", OperatingSystem::Linux, "Extended Boot Loader Partition"),
    /// Linux reserved
    (LINUX_RESERVED, "8DA63339-0007-60C0-C436-083AC8230908", OperatingSystem::Linux, "Linux Reserved"),

    /// FreeBSD boot partition
    (FREEBSD_BOOT, "83BD6B9D-7F41-11DC-BE0B-001560B84F0F", OperatingSystem::FreeBsd, "FreeBSD Boot Partition"),
    /// FreeBSD data partition
    (FREEBSD_DATA, "516E7CB4-6ECF-11D6-8FF8-00022D09712B", OperatingSystem::FreeBsd, "FreeBSD Data Partition"),
    /// FreeBSD swap partition
    (FREEBSD_SWAP, "516E7CB5-6ECF-11D6-8FF8-00022D09712B", OperatingSystem::FreeBsd, "FreeBSD Swap Partition"),
    /// FreeBSD unix file system partition
    (FREEBSD_UFS, "516E7CB6-6ECF-11D6-8FF8-00022D09712B", OperatingSystem::FreeBsd, "FreeBSD UFS Partition"),
    /// FreeBSD vinum volume manager partition
    (FREEBSD_VINUM, "516E7CB8-6ECF-11D6-8FF8-00022D09712B", OperatingSystem::FreeBsd, "FreeBSD Vinum Volume Manager Partition"),
    /// FreeBSD ZFS partition
    (FREEBSD_ZFS, "516E7CBA-6ECF-11D6-8FF8-00022D09712B", OperatingSystem::FreeBsd, "FreeBSD ZFS Partition"),

    /// Hierarchical file system plus (HFS+) partition
    (MACOS_HFSPLUS, "48465300-0000-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple HFS+ Partition"),
    /// Apple file system partition
    (MACOS_APFS, "7C3457EF-0000-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple APFS Container"),
    /// Apple UFS partition
    (MACOS_UFS, "55465300-0000-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple UFS Container"),
    /// Apple RAID partition
    (MACOS_RAID, "52414944-0000-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple RAID Partition"),
    /// Apple RAID partition, offline
    (MACOS_RAID_OFFLINE, "52414944-5F4F-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple RAID Partition, offline"),
    /// Apple boot partition (recovery HD)
    (MACOS_RECOVERY, "426F6F74-0000-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple Boot Partition (Recovery HD)"),
    /// Apple label
    (MACOS_LABEL, "4C616265-6C00-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple Label"),
    /// Apple TV recovery partition
    (MACOS_TV_RECOVERY, "5265636F-7665-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple TV Recovery Partition"),
    /// Apple core storage partition
    (MACOS_CORE_STORAGE, "53746F72-6167-11AA-AA11-00306543ECAC", OperatingSystem::MacOs, "Apple Core Storage Container"),

    /// Solaris boot partition
    (SOLARIS_BOOT, "6A82CB45-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris Boot Partition"),
    /// Solaris root partition
    (SOLARIS_ROOT, "6A85CF4D-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris Root Partition"),
    /// Solaris swap partition
    (SOLARIS_SWAP, "6A87C46F-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris Swap Partition"),
    /// Solaris backup partition
    (SOLARIS_BACKUP, "6A8B642B-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris Backup Partition"),
    /// Solaris /usr partition, also used by Apple ZFS
    (SOLARIS_USR, "6A898CC3-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris /usr Partition"),
    /// Solaris /var partition
    (SOLARIS_VAR, "6A8EF2E9-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris /var Partition"),
    /// Solaris /home partition
    (SOLARIS_HOME, "6A90BA39-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris /home Partition"),
    /// Solaris alternate sector
    (SOLARIS_ALT, "6A9283A5-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris Alternate Sector"),
    /// Solaris reserved partition
    (SOLARIS_RESERVED, "6A945A3B-1DD2-11B2-99A6-080020736631", OperatingSystem::Solaris, "Solaris Reserved Partition"),

    /// NetBSD swap partition
    (NETBSD_SWAP, "49F48D32-B10E-11DC-B99B-0019D1879648", OperatingSystem::NetBsd, "NetBSD Swap Partition"),
    /// NetBSD FFS partition
    (NETBSD_FFS, "49F48D5A-B10E-11DC-B99B-0019D1879648", OperatingSystem::NetBsd, "NetBSD FFS Partition"),
    /// NetBSD LFS partition
    (NETBSD_LFS, "49F48D82-B10E-11DC-B99B-0019D1879648", OperatingSystem::NetBsd, "NetBSD LFS Partition"),
    /// NetBSD RAID partition
    (NETBSD_RAID, "49F48DAA-B10E-11DC-B99B-0019D1879648", OperatingSystem::NetBsd, "NetBSD RAID Partition"),
    /// NetBSD concatenated partition
    (NETBSD_CONCAT, "2DB519C4-B10F-11DC-B99B-0019D1879648", OperatingSystem::NetBsd, "NetBSD Concatenated Partition"),
    /// NetBSD encrypted partition
    (NETBSD_ENCRYPTED, "2DB519EC-B10F-11DC-B99B-0019D1879648", OperatingSystem::NetBsd, "NetBSD Encrypted Partition"),

    /// OpenBSD data partition
    (OPENBSD_DATA, "824CC7A0-36A8-11E3-890A-952519AD3F61", OperatingSystem::OpenBsd, "OpenBSD Data Partition"),

    /// ChromeOS kernel
    (CHROME_KERNEL, "FE3A2A5D-4F32-41A7-B725-ACCC3285A309", OperatingSystem::ChromeOs, "ChromeOS Kernel"),
    /// ChromeOS rootfs
    (CHROME_ROOTFS, "3CB8E202-3B7E-47DD-8A3C-7FF2A13CFCEC", OperatingSystem::ChromeOs, "ChromeOS Rootfs"),
    /// ChromeOS future use
    (CHROME_FUTURE, "2E0A753D-9E48-43B0-8337-B15192CB1B5E", OperatingSystem::ChromeOs, "ChromeOS Future Use"),

    /// Haiku BFS
    (HAIKU_BFS, "42465331-3BA3-10F1-802A-4861696B7521", OperatingSystem::Haiku, "Haiku BFS"),

    /// Ceph OSD
    (CEPH_OSD, "4FBD7E29-9D25-41B8-AFD0-062C0CEFF05D", OperatingSystem::Ceph, "Ceph OSD"),
    /// Ceph journal
    (CEPH_JOURNAL, "45B0969E-9B03-4F30-B4C6-B4B80CEFF106", OperatingSystem::Ceph, "Ceph Journal"),

    /// VMware VMFS filesystem partition
    (VMWARE_VMFS, "AA31E02A-400F-11DB-9590-000C2911D1B8", OperatingSystem::VmWare, "VMware VMFS Partition"),
    /// VMware reserved
    (VMWARE_RESERVED, "9198EFFC-31C0-11DB-8F78-000C2911D1B8", OperatingSystem::VmWare, "VMware Reserved"),

    /// QNX power-safe (QNX6) file system
    (QNX6, "CEF5A9AD-73BC-4601-89F3-CDEEEEE321A1", OperatingSystem::Qnx, "QNX Power-Safe File System"),

    /// Plan 9 partition
    (PLAN9, "C91818F9-8025-47AF-89D2-F030D7000C2C", OperatingSystem::Plan9, "Plan 9 Partition"),

    /// ONIE boot partition
    (ONIE_BOOT, "7412F7D5-A156-4B13-81DC-867174929325", OperatingSystem::Onie, "ONIE Boot Partition"),
    /// ONIE config partition
    (ONIE_CONFIG, "D4E6E2CD-4469-46F3-B5CB-1BFF57AFC149", OperatingSystem::Onie, "ONIE Config Partition"),

    /// PReP boot partition
    (PREP_BOOT, "9E1A2D38-C612-4316-AA26-8B49521E5A8B", OperatingSystem::PowerPc, "PReP Boot Partition"),
}
