use serde::{Deserialize, Serialize};

use super::{
    AttributeLine, SDPAttribute, SDPTrivialAttribute, extmap::Extmap, fingerprint::Fingerprint,
    group::Group, identity::Identity, msid::MsidSemantic, set_flag, set_once, setup::SetupRole,
};
use crate::errors::SDPResult;

/// Session level attributes, in print order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAttributes {
    pub groups: Vec<Group>,
    pub msid_semantic: Option<MsidSemantic>,
    pub ice_lite: bool,
    pub ice_ufrag: Option<String>,
    pub ice_pwd: Option<String>,
    pub ice_options: Option<Vec<String>>,
    pub fingerprints: Vec<Fingerprint>,
    pub setup: Option<SetupRole>,
    pub tls_id: Option<String>,
    pub identities: Vec<Identity>,
    pub extmaps: Vec<Extmap>,
    pub unrecognized: Vec<SDPTrivialAttribute>,
}

impl SessionAttributes {
    /// Parses one `a=` line of the session section and merges it in.
    pub fn read(&mut self, line: &AttributeLine<'_>) -> SDPResult<()> {
        let attribute = SDPAttribute::read_session(line)?;
        self.push(attribute).map_err(|err| line.error(0, err))
    }

    pub fn push(&mut self, attribute: SDPAttribute) -> SDPResult<()> {
        match attribute {
            SDPAttribute::Group(group) => self.groups.push(group),
            SDPAttribute::MsidSemantic(semantic) => self.msid_semantic = Some(semantic),
            SDPAttribute::IceLite => set_flag(&mut self.ice_lite, "ice-lite")?,
            SDPAttribute::IceUfrag(ufrag) => set_once(&mut self.ice_ufrag, ufrag, "ice-ufrag")?,
            SDPAttribute::IcePwd(pwd) => set_once(&mut self.ice_pwd, pwd, "ice-pwd")?,
            SDPAttribute::IceOptions(options) => {
                set_once(&mut self.ice_options, options, "ice-options")?
            }
            SDPAttribute::Fingerprint(fingerprint) => self.fingerprints.push(fingerprint),
            SDPAttribute::Setup(role) => set_once(&mut self.setup, role, "setup")?,
            SDPAttribute::TlsId(id) => set_once(&mut self.tls_id, id, "tls-id")?,
            SDPAttribute::Identity(identity) => self.identities.push(identity),
            SDPAttribute::Extmap(extmap) => self.extmaps.push(extmap),
            SDPAttribute::Trivial(trivial) => self.unrecognized.push(trivial),
            other => self.unrecognized.push(SDPTrivialAttribute::from(&other)),
        }
        Ok(())
    }

    /// The attributes in print order.
    pub fn to_attributes(&self) -> Vec<SDPAttribute> {
        let mut attributes = Vec::new();
        attributes.extend(self.groups.iter().cloned().map(SDPAttribute::Group));
        attributes.extend(self.msid_semantic.clone().map(SDPAttribute::MsidSemantic));
        if self.ice_lite {
            attributes.push(SDPAttribute::IceLite);
        }
        attributes.extend(self.ice_ufrag.clone().map(SDPAttribute::IceUfrag));
        attributes.extend(self.ice_pwd.clone().map(SDPAttribute::IcePwd));
        attributes.extend(self.ice_options.clone().map(SDPAttribute::IceOptions));
        attributes.extend(
            self.fingerprints
                .iter()
                .cloned()
                .map(SDPAttribute::Fingerprint),
        );
        attributes.extend(self.setup.map(SDPAttribute::Setup));
        attributes.extend(self.tls_id.clone().map(SDPAttribute::TlsId));
        attributes.extend(self.identities.iter().cloned().map(SDPAttribute::Identity));
        attributes.extend(self.extmaps.iter().cloned().map(SDPAttribute::Extmap));
        attributes.extend(self.unrecognized.iter().cloned().map(SDPAttribute::Trivial));
        attributes
    }
}
